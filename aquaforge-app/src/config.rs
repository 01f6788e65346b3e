use anyhow::{Context, Result};
use aquaforge_core::{error::AquaforgeError, state::AppState};
use aquaforge_schemas::file_formats::RecordFile;
use std::{fs, path::Path};
use tracing::{debug, info};

/// Loads every YAML record file in `data_dir` into a fresh state.
///
/// Files are read in name order so that ties between records (e.g. two
/// samplings on the same day) resolve the same way on every run.
pub fn load_state<P: AsRef<Path>>(data_dir: P) -> Result<AppState> {
    let data_dir = data_dir.as_ref();
    info!(dir = %data_dir.display(), "loading pond records");

    let mut paths = Vec::new();
    for entry in fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read directory: {:?}", data_dir))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut state = AppState::new();
    for path in paths {
        let file = read_record_file(&path)?;
        debug!(
            file = %path.display(),
            ponds = file.ponds.len(),
            feed_logs = file.feed_logs.len(),
            samplings = file.samplings.len(),
            "merging record file"
        );
        state
            .merge(file)
            .with_context(|| format!("Invalid records in {:?}", path))?;
    }

    info!(
        ponds = state.ponds.len(),
        feed_logs = state.feed_logs.len(),
        samplings = state.samplings.len(),
        mortalities = state.mortalities.len(),
        water_quality = state.water_quality.len(),
        "records loaded"
    );
    Ok(state)
}

fn read_record_file(path: &Path) -> Result<RecordFile, AquaforgeError> {
    let name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| AquaforgeError::FileIO(name.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| AquaforgeError::YamlParsing(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaforge_core::derive_for;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const POND: &str = r#"
schema_version: "1"
ponds:
  - id: k1
    name: Kolam 1
    species: Tilapia
    initial_stock: 500
    initial_total_weight: 5000
    start_date: 2024-04-01
    duration_days: 60
"#;

    const SAMPLINGS: &str = r#"
schema_version: "1"
samplings:
  - id: s1
    pond_id: k1
    date: 2024-04-15
    sampled_count: 2
    sample_weights: [18.0, 20.0]
"#;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shipped_data_directory_loads() {
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data");
        let state = load_state(&data).unwrap();
        assert_eq!(state.ponds.len(), 2);
        assert_eq!(state.samplings.len(), 3);
        assert_eq!(state.feed_logs.len(), 5);
        assert_eq!(state.mortalities.len(), 3);
        assert_eq!(state.water_quality.len(), 3);

        let vars = derive_for(&state, "kolam-a", date(2024, 2, 10)).unwrap();
        assert_eq!(vars.nt, 950);
        assert_eq!(vars.latest_sampling_day, Some(35));
        assert_eq!(vars.wt_ind, 45.0);
        assert_eq!(vars.feed_total, 80_000.0);
    }

    #[test]
    fn files_merge_in_name_order_with_missing_collections_empty() {
        let dir = TempDir::new().unwrap();
        // Sorted after the pond file even though it is written first.
        write(dir.path(), "20_samplings.yml", SAMPLINGS);
        write(dir.path(), "10_ponds.yaml", POND);
        write(dir.path(), "notes.txt", "not a record file");

        let state = load_state(dir.path()).unwrap();
        assert_eq!(state.ponds.len(), 1);
        assert!(state.feed_logs.is_empty());
        assert!(state.mortalities.is_empty());
        assert_eq!(state.samplings[0].day, 14);

        let vars = derive_for(&state, "k1", date(2024, 4, 21)).unwrap();
        assert_eq!(vars.wt_ind, 19.0);
        assert_eq!(vars.days, 20);
    }

    #[test]
    fn duplicate_sampling_in_a_later_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "10_ponds.yaml", POND);
        write(dir.path(), "20_samplings.yaml", SAMPLINGS);
        write(dir.path(), "30_resampled.yaml", &SAMPLINGS.replace("id: s1", "id: s2"));

        let err = load_state(dir.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("30_resampled.yaml"), "{message}");
        assert!(message.contains("already has a sampling on 2024-04-15"), "{message}");
    }

    #[test]
    fn malformed_yaml_names_the_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "broken.yaml", "schema_version: [unclosed");
        let message = format!("{:#}", load_state(dir.path()).unwrap_err());
        assert!(message.contains("broken.yaml"), "{message}");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_state(dir.path().join("absent")).is_err());
    }
}
