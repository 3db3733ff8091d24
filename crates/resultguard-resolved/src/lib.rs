//! Resolver adapters: read a call-site dump and build the domain model.
//!
//! This crate is allowed to do filesystem IO. It never runs the Java front end itself; the dump
//! is produced upstream and handed over as a file or a string.

#![forbid(unsafe_code)]

mod dump;
mod index;

use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;
use resultguard_domain::model::{AnalysisModel, SourceFileModel};
use resultguard_types::RepoPath;

pub use dump::{
    CallSiteDumpV1, CallSiteRecord, ClassRecord, FileRecord, PackageRecord, PurityRecord,
    RangeRecord, SCHEMA_CALLSITES_V1, SymbolRecord, TypeRecord,
};
pub use index::SymbolIndex;

/// Parse a dump from JSON text. Rejects unknown schema ids.
pub fn parse_dump(text: &str) -> anyhow::Result<CallSiteDumpV1> {
    let dump: CallSiteDumpV1 = serde_json::from_str(text).context("parse call-site dump json")?;
    if dump.schema != SCHEMA_CALLSITES_V1 {
        anyhow::bail!(
            "unsupported call-site dump schema: {} (expected {})",
            dump.schema,
            SCHEMA_CALLSITES_V1
        );
    }
    Ok(dump)
}

pub fn load_dump(path: &Utf8Path) -> anyhow::Result<CallSiteDumpV1> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_dump(&text).with_context(|| format!("load {}", path))
}

/// Build the in-memory model used by the decision engine.
///
/// Files are resolved in parallel; their order in the dump is preserved.
pub fn build_analysis_model(dump: &CallSiteDumpV1) -> AnalysisModel {
    let index = SymbolIndex::new(dump);
    let files = dump
        .files
        .par_iter()
        .map(|file| {
            let path = RepoPath::new(&file.path);
            let call_sites = file
                .call_sites
                .iter()
                .map(|record| index.call_site(&path, record))
                .collect();
            SourceFileModel { path, call_sites }
        })
        .collect();
    AnalysisModel { files }
}

/// Convenience: [`load_dump`] followed by [`build_analysis_model`].
pub fn load_analysis_model(path: &Utf8Path) -> anyhow::Result<AnalysisModel> {
    let dump = load_dump(path)?;
    Ok(build_analysis_model(&dump))
}
