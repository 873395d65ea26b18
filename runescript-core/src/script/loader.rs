//! Embedded script table registry
//!
//! Built-in tables are compiled into the binary and parsed on first access.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{config::ScriptConfig, ScriptId};
use crate::error::{Error, Result};
use crate::transducer::Transducer;

static REGISTRY: OnceLock<HashMap<ScriptId, Transducer>> = OnceLock::new();

macro_rules! embed_script_table {
    ($id:expr, $path:expr) => {
        ($id, include_str!($path))
    };
}

fn load_embedded_tables() -> Result<HashMap<ScriptId, Transducer>> {
    let embedded = [
        embed_script_table!(ScriptId::Futhorc, "../../configs/scripts/futhorc.toml"),
        embed_script_table!(
            ScriptId::ElderFuthark,
            "../../configs/scripts/elder_futhark.toml"
        ),
        embed_script_table!(
            ScriptId::YoungerFuthark,
            "../../configs/scripts/younger_futhark.toml"
        ),
        embed_script_table!(
            ScriptId::MedievalRunes,
            "../../configs/scripts/medieval.toml"
        ),
        embed_script_table!(ScriptId::Gothic, "../../configs/scripts/gothic.toml"),
    ];

    let mut registry = HashMap::with_capacity(embedded.len());
    for (id, toml_content) in embedded {
        let config = ScriptConfig::from_toml_str(toml_content).map_err(|e| {
            Error::Configuration(format!("Failed to parse {} table: {e}", id.code()))
        })?;

        // The table must describe the script it is registered under
        if config.metadata.code != id.code() {
            return Err(Error::Configuration(format!(
                "Table code mismatch: expected {}, got {}",
                id.code(),
                config.metadata.code
            )));
        }

        registry.insert(id, Transducer::from_config(&config));
    }

    tracing::debug!(scripts = registry.len(), "loaded embedded script tables");
    Ok(registry)
}

fn registry() -> &'static HashMap<ScriptId, Transducer> {
    REGISTRY.get_or_init(|| load_embedded_tables().expect("Failed to load embedded script tables"))
}

/// Shared transducer for a built-in script
pub fn transducer(id: ScriptId) -> &'static Transducer {
    // Every ScriptId has an embedded table; load_embedded_tables fails otherwise
    &registry()[&id]
}

/// Built-in scripts with their transducers, in display order
pub fn list_scripts() -> Vec<(ScriptId, &'static Transducer)> {
    ScriptId::ALL
        .into_iter()
        .map(|id| (id, transducer(id)))
        .collect()
}
