use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// DemoPars contains the values to be pushed to the buffer and optionally the buffer capacity.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoPars<T> {
    #[serde(default)]
    pub capacity: Option<usize>,
    pub values: Vec<T>,
}

/// read_demo_pars reads the JSON file and decodes the JSON string into the demo parameters
/// struct.
pub fn read_demo_pars<T: DeserializeOwned>(filepath: &Path) -> anyhow::Result<DemoPars<T>> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}
