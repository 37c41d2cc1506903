//! CSV-backed movie catalog implementation.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{
    CatalogError, CatalogStats, MergeSummary, Movie, MovieCatalog, MovieRecord, CATALOG_HEADER,
};

/// Movie catalog stored as a flat CSV table with a `Title,Rating,Genre` header.
///
/// The file is created lazily by the first non-empty merge. An empty or
/// corrupt file is treated as a cache miss and replaced on the next merge.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    /// Create a catalog backed by the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored record.
    ///
    /// `Ok(None)` means the file does not exist or is zero bytes.
    fn load(&self) -> Result<Option<Vec<MovieRecord>>, CatalogError> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CatalogError::Read(e.to_string())),
        };
        if metadata.len() == 0 {
            return Ok(None);
        }

        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| CatalogError::Read(e.to_string()))?;

        let headers = reader.headers().map_err(read_error)?;
        if !headers.iter().eq(CATALOG_HEADER.iter().copied()) {
            return Err(CatalogError::Malformed(format!(
                "expected header {:?}, found {:?}",
                CATALOG_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<MovieRecord>() {
            let record = row.map_err(read_error)?;
            if record.title.trim().is_empty() {
                debug!(path = %self.path.display(), "Skipping catalog row without a title");
                continue;
            }
            records.push(record);
        }

        Ok(Some(records))
    }

    /// Write the full table to a sibling temp file, then move it into place.
    fn write_all(&self, records: &[MovieRecord]) -> Result<(), CatalogError> {
        let tmp_path = self.tmp_path();

        let write = || -> Result<(), csv::Error> {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp_path)?;
            writer.write_record(CATALOG_HEADER)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
            Ok(())
        };

        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::Write(e.to_string()));
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CatalogError::Write(e.to_string())
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("catalog"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// I/O failures leave the file untouched; anything else means corrupt content.
fn read_error(e: csv::Error) -> CatalogError {
    if e.is_io_error() {
        CatalogError::Read(e.to_string())
    } else {
        CatalogError::Malformed(e.to_string())
    }
}

impl MovieCatalog for CsvCatalog {
    fn lookup(&self, genre: &str) -> Option<Vec<Movie>> {
        let records = match self.load() {
            Ok(Some(records)) => records,
            Ok(None) => {
                debug!(path = %self.path.display(), "Catalog file absent or empty");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Catalog unreadable, treating as cache miss");
                return None;
            }
        };

        let movies: Vec<Movie> = records
            .iter()
            .filter(|r| r.matches_genre(genre))
            .map(MovieRecord::to_movie)
            .collect();

        if movies.is_empty() {
            None
        } else {
            Some(movies)
        }
    }

    fn merge(&self, movies: &[Movie], genre: &str) -> Result<MergeSummary, CatalogError> {
        let existing = match self.load() {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(e @ CatalogError::Malformed(_)) => {
                warn!(path = %self.path.display(), error = %e, "Catalog corrupt, recreating it");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Catalog unreadable, not overwriting it");
                return Err(e);
            }
        };

        if movies.is_empty() {
            return Ok(MergeSummary {
                added: 0,
                duplicates: 0,
                total: existing.len(),
            });
        }

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut combined = Vec::with_capacity(existing.len() + movies.len());

        for record in existing {
            if seen.insert(record.key()) {
                combined.push(record);
            }
        }

        let mut added = 0;
        let mut duplicates = 0;
        for movie in movies {
            let record = MovieRecord::from_movie(movie, genre);
            if seen.insert(record.key()) {
                combined.push(record);
                added += 1;
            } else {
                duplicates += 1;
            }
        }

        if let Err(e) = self.write_all(&combined) {
            warn!(path = %self.path.display(), error = %e, "Failed to save movies to catalog");
            return Err(e);
        }

        info!(
            genre = genre,
            added = added,
            duplicates = duplicates,
            total = combined.len(),
            "Merged movies into catalog"
        );

        Ok(MergeSummary {
            added,
            duplicates,
            total: combined.len(),
        })
    }

    fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let records = self.load()?.unwrap_or_default();

        let mut genres: BTreeMap<String, usize> = BTreeMap::new();
        for record in &records {
            *genres.entry(record.genre.trim().to_lowercase()).or_insert(0) += 1;
        }

        Ok(CatalogStats {
            total_records: records.len(),
            genres,
        })
    }
}
