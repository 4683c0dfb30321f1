//! Builtin tools.
//!
//! Both are pure, synchronous, and infallible over valid input: no
//! network access, no side effects.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::model::ToolSpec;
use crate::tools::{ToolError, ToolRegistry};

/// Look up the weather for a city.
///
/// Case-insensitive substring match against a fixed set of known cities;
/// anything else gets the fallback message.
pub fn get_weather(city: &str) -> String {
    let city = city.to_lowercase();
    if city.contains("london") {
        "It is rainy and 15°C in London.".to_string()
    } else if city.contains("vijayawada") {
        "It is sunny and 32°C in Vijayawada.".to_string()
    } else {
        "Weather data not available for this city.".to_string()
    }
}

/// Multiply two integers exactly.
///
/// Arguments are fixed-width `i64`; the product is computed in `i128` so
/// it cannot overflow.
pub fn multiply(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

#[derive(Deserialize)]
struct WeatherInput {
    city: String,
}

#[derive(Deserialize)]
struct MultiplyInput {
    a: i64,
    b: i64,
}

impl ToolRegistry {
    /// Registry populated with the builtin tools.
    pub fn builtin() -> Result<Self, ToolError> {
        let mut registry = Self::new();

        registry.register(
            ToolSpec {
                name: "get_weather".into(),
                description: "Use this to get the weather for a specific city.".into(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "city": {
                            "type": "string",
                            "description": "Name of the city to look up."
                        }
                    },
                    "required": ["city"]
                }),
            },
            |input| {
                let args: WeatherInput = parse_input(input)?;
                Ok(Value::String(get_weather(&args.city)))
            },
        )?;

        registry.register(
            ToolSpec {
                name: "multiply".into(),
                description: "Use this to multiply two numbers.".into(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "a": { "type": "integer", "description": "First factor." },
                        "b": { "type": "integer", "description": "Second factor." }
                    },
                    "required": ["a", "b"]
                }),
            },
            |input| {
                let args: MultiplyInput = parse_input(input)?;
                let product = multiply(args.a, args.b);
                // serde_json numbers cap at 64 bits; wider products go back
                // as decimal text.
                Ok(i64::try_from(product)
                    .map_or_else(|_| Value::String(product.to_string()), Value::from))
            },
        )?;

        Ok(registry)
    }
}

fn parse_input<T: serde::de::DeserializeOwned>(input: &Value) -> Result<T, ToolError> {
    serde_json::from_value(input.clone()).map_err(|e| ToolError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolCall;
    use crate::tools::ToolHost;

    #[test]
    fn weather_matches_london_any_case() {
        assert_eq!(get_weather("LONDON, UK"), "It is rainy and 15°C in London.");
        assert_eq!(get_weather("london"), "It is rainy and 15°C in London.");
        assert_eq!(
            get_weather("Greater London"),
            "It is rainy and 15°C in London."
        );
    }

    #[test]
    fn weather_matches_vijayawada_any_case() {
        assert_eq!(
            get_weather("VIJAYAWADA"),
            "It is sunny and 32°C in Vijayawada."
        );
        assert_eq!(
            get_weather("vijayawada, india"),
            "It is sunny and 32°C in Vijayawada."
        );
    }

    #[test]
    fn weather_falls_back_for_unknown_cities() {
        assert_eq!(
            get_weather("Paris"),
            "Weather data not available for this city."
        );
        assert_eq!(get_weather(""), "Weather data not available for this city.");
    }

    #[test]
    fn multiply_is_exact() {
        assert_eq!(multiply(6, 7), 42);
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(0, 100), 0);
    }

    #[test]
    fn multiply_does_not_overflow() {
        assert_eq!(
            multiply(i64::MAX, i64::MAX),
            i128::from(i64::MAX) * i128::from(i64::MAX)
        );
    }

    #[tokio::test]
    async fn builtin_registry_executes_weather() {
        let registry = ToolRegistry::builtin().unwrap();
        let call = ToolCall {
            id: "1".into(),
            name: "get_weather".into(),
            input: json!({"city": "London"}),
        };
        let output = registry.execute(&call).await.unwrap();
        assert_eq!(output, Value::String("It is rainy and 15°C in London.".into()));
    }

    #[tokio::test]
    async fn builtin_registry_executes_multiply() {
        let registry = ToolRegistry::builtin().unwrap();
        let call = ToolCall {
            id: "1".into(),
            name: "multiply".into(),
            input: json!({"a": 12, "b": 13}),
        };
        let output = registry.execute(&call).await.unwrap();
        assert_eq!(output, json!(156));
    }

    #[tokio::test]
    async fn builtin_registry_rejects_malformed_arguments() {
        let registry = ToolRegistry::builtin().unwrap();
        let call = ToolCall {
            id: "1".into(),
            name: "multiply".into(),
            input: json!({"a": "twelve"}),
        };
        let result = registry.execute(&call).await;
        assert!(matches!(result, Err(ToolError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn wide_product_returns_decimal_text() {
        let registry = ToolRegistry::builtin().unwrap();
        let call = ToolCall {
            id: "1".into(),
            name: "multiply".into(),
            input: json!({"a": i64::MAX, "b": 2}),
        };
        let output = registry.execute(&call).await.unwrap();
        let expected = (i128::from(i64::MAX) * 2).to_string();
        assert_eq!(output, Value::String(expected));
    }
}
