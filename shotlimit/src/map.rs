use std::{fs, path::Path};

use log::debug;
use shotlimit_plugin::CustomMapObjectHandler;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Couldn't read map file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Object '{object}' opened on line {line} is never closed with 'end'")]
    Unterminated { object: String, line: usize },
}

/// One `name ... end` block of a map file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapObject {
    pub name: String,
    /// 1-based line of the object keyword.
    pub line: usize,
    pub lines: Vec<String>,
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content).trim()
}

/// Splits map text into top level objects.
///
/// `define ... enddef` groups are templates, not placed objects, so their
/// contents are skipped.
pub fn parse_map(content: &str) -> Result<Vec<MapObject>, MapError> {
    let mut objects = Vec::new();
    let mut current: Option<MapObject> = None;
    let mut definition: Option<usize> = None;

    for (index, raw) in content.lines().enumerate() {
        let line = strip_comment(raw);
        let Some(keyword) = line.split_whitespace().next() else {
            continue;
        };

        if definition.is_some() {
            if keyword.eq_ignore_ascii_case("enddef") {
                definition = None;
            }
            continue;
        }

        if current.is_none() && keyword.eq_ignore_ascii_case("define") {
            definition = Some(index + 1);
            continue;
        }

        if keyword.eq_ignore_ascii_case("end") {
            objects.extend(current.take());
            continue;
        }

        if let Some(object) = &mut current {
            object.lines.push(line.to_string());
        } else {
            current = Some(MapObject {
                name: keyword.to_string(),
                line: index + 1,
                lines: Vec::new(),
            });
        }
    }

    if let Some(line) = definition {
        return Err(MapError::Unterminated {
            object: "define".to_string(),
            line,
        });
    }

    match current {
        Some(object) => Err(MapError::Unterminated {
            object: object.name,
            line: object.line,
        }),
        None => Ok(objects),
    }
}

/// Hands every object of the map file to `handler`, returning how many it accepted.
pub fn load_map(
    path: &Path,
    handler: &mut dyn CustomMapObjectHandler,
) -> Result<usize, MapError> {
    let content = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut handled = 0;
    for object in parse_map(&content)? {
        if handler.map_object(&object.name, &object.lines) {
            handled += 1;
        } else {
            debug!("Skipping map object '{}' on line {}", object.name, object.line);
        }
    }
    Ok(handled)
}
