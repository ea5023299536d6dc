use anyhow::Context;

use super::PinStore;

/// Keeps the serialized list in memory; lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl PinStore for MemoryStore {
    fn label(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> anyhow::Result<Option<Vec<String>>> {
        self.payload
            .as_deref()
            .map(|raw| serde_json::from_str(raw).context("parsing in-memory pins failed"))
            .transpose()
    }

    fn save(&mut self, pins: &[String]) -> anyhow::Result<()> {
        self.payload = Some(serde_json::to_string(pins).context("serializing pins failed")?);
        Ok(())
    }
}
