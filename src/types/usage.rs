//! Token usage tracking.

use serde::{Deserialize, Serialize};

/// Token usage for one model call, or accumulated across several.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_creation_tokens: Option<u32>,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    /// Merge another usage into this one (accumulate).
    pub fn merge(&mut self, other: &Usage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
        merge_counter(&mut self.cache_read_tokens, other.cache_read_tokens);
        merge_counter(&mut self.cache_creation_tokens, other.cache_creation_tokens);
    }
}

fn merge_counter(total: &mut Option<u32>, value: Option<u32>) {
    if let Some(v) = value {
        let sum = total.get_or_insert(0);
        *sum = sum.saturating_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_accumulates_optional_counters() {
        let mut total = Usage {
            input_tokens: 10,
            output_tokens: 5,
            ..Default::default()
        };
        total.merge(&Usage {
            input_tokens: 3,
            output_tokens: 2,
            cache_read_tokens: Some(7),
            cache_creation_tokens: None,
        });

        assert_eq!(total.input_tokens, 13);
        assert_eq!(total.output_tokens, 7);
        assert_eq!(total.total_tokens(), 20);
        assert_eq!(total.cache_read_tokens, Some(7));
        assert_eq!(total.cache_creation_tokens, None);
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut total = Usage {
            input_tokens: u32::MAX - 1,
            output_tokens: 10,
            cache_read_tokens: Some(u32::MAX),
            cache_creation_tokens: None,
        };
        assert_eq!(total.total_tokens(), u32::MAX);

        total.merge(&Usage {
            input_tokens: 5,
            output_tokens: 1,
            cache_read_tokens: Some(1),
            cache_creation_tokens: Some(2),
        });

        assert_eq!(total.input_tokens, u32::MAX);
        assert_eq!(total.output_tokens, 11);
        assert_eq!(total.cache_read_tokens, Some(u32::MAX));
        assert_eq!(total.cache_creation_tokens, Some(2));
    }
}
