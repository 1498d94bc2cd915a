use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use geojson::FeatureCollection;

use crate::model::{
    assembly::{AssembledFeatures, StopMappingRow},
    GtfsGoError,
};

pub const ROUTES_FILENAME: &str = "routes.geojson";
pub const STOPS_FILENAME: &str = "stops.geojson";
pub const STOP_MAPPING_FILENAME: &str = "result.csv";

/// writes the layers of a run into `output_directory`, creating it when
/// needed and replacing existing files. returns the written paths.
pub fn write_outputs(
    output_directory: &Path,
    features: &AssembledFeatures,
) -> Result<Vec<PathBuf>, GtfsGoError> {
    std::fs::create_dir_all(output_directory).map_err(|e| GtfsGoError::OutputError {
        path: output_directory.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut written = vec![
        write_feature_collection(output_directory, ROUTES_FILENAME, &features.routes)?,
        write_feature_collection(output_directory, STOPS_FILENAME, &features.stops)?,
    ];
    if let Some(rows) = &features.stop_mapping {
        written.push(write_stop_mapping(output_directory, rows)?);
    }
    Ok(written)
}

fn write_feature_collection(
    directory: &Path,
    filename: &str,
    collection: &FeatureCollection,
) -> Result<PathBuf, GtfsGoError> {
    let filepath = directory.join(filename);
    let output_error = |message: String| GtfsGoError::OutputError {
        path: filepath.clone(),
        message,
    };
    let file = File::create(&filepath).map_err(|e| output_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, collection).map_err(|e| output_error(e.to_string()))?;
    writer.flush().map_err(|e| output_error(e.to_string()))?;
    Ok(filepath)
}

fn write_stop_mapping(directory: &Path, rows: &[StopMappingRow]) -> Result<PathBuf, GtfsGoError> {
    let filepath = directory.join(STOP_MAPPING_FILENAME);
    let output_error = |message: String| GtfsGoError::OutputError {
        path: filepath.clone(),
        message,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(&filepath)
        .map_err(|e| output_error(e.to_string()))?;
    if rows.is_empty() {
        // serialize writes the header with the first row only
        writer
            .write_record(["stop_id", "stop_name", "similar_stop_id", "similar_stop_name"])
            .map_err(|e| output_error(e.to_string()))?;
    }
    for row in rows.iter() {
        writer
            .serialize(row)
            .map_err(|e| output_error(e.to_string()))?;
    }
    writer.flush().map_err(|e| output_error(e.to_string()))?;
    Ok(filepath)
}
