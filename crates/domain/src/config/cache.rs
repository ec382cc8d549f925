use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsCacheConfig {
    /// Number of shards of the snapshot map (power of two, > 1)
    #[serde(default = "default_shard_amount")]
    pub shard_amount: usize,
}

impl Default for RecordsCacheConfig {
    fn default() -> Self {
        Self {
            shard_amount: default_shard_amount(),
        }
    }
}

fn default_shard_amount() -> usize {
    16
}
