//! `.ulyz` archive access.

use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Name of the sheet member inside a `.ulyz` archive.
pub const CONTENT_XML: &str = "Content.xml";

/// Locate the single `Content.xml` member, at any depth.
pub fn find_content_member<R: Read + Seek>(archive: &ZipArchive<R>) -> Result<String> {
    let matches: Vec<&str> = archive
        .file_names()
        .filter(|name| {
            Path::new(name)
                .file_name()
                .map(|f| f == CONTENT_XML)
                .unwrap_or(false)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(Error::ContentNotFound),
        [name] => Ok(name.to_string()),
        _ => Err(Error::AmbiguousContent(matches.len())),
    }
}

/// Read the raw sheet XML out of a `.ulyz` archive.
pub fn read_content_xml<R: Read + Seek>(reader: R) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(reader)?;
    let member = find_content_member(&archive)?;
    log::debug!("Reading archive member {}", member);

    let mut file = archive.by_name(&member)?;
    let mut data = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut data)?;
    Ok(data)
}
