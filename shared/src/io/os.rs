////////////////////////////////////////////////////////////////////////////////
// File: src/io/os.rs
// Description: OS interaction module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::fs;
use std::{
  collections::BTreeSet,
  ffi::OsStr,
  path::{Path, PathBuf},
};

use crate::{info_print, util::settings::Setting, util::traits::Serializable};

use anyhow::{anyhow, Context, Result};

////////////////////////////////////////////////////////////////////////////////
// Filesystem Interactions
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct FileInfo {
  pub name: String,
  pub stem: String,
  pub path: PathBuf,
  pub content: String,
}

impl FileInfo {
  pub fn new(name: String, path: PathBuf, content: String) -> Result<Self> {
    let stem = path
      .file_stem()
      .and_then(OsStr::to_str)
      .ok_or_else(|| return anyhow!("(ArgError) No file stem in `{}`", name))?
      .to_string();

    return Ok(Self {
      name,
      stem,
      path,
      content,
    });
  }

  /// In-memory source, used where no file exists on disk.
  pub fn from_source(name: &str, content: &str) -> Result<Self> {
    return Self::new(
      name.to_string(),
      PathBuf::from(name),
      content.replace("\r\n", "\n"),
    );
  }

  pub fn from_path(
    path: PathBuf,
    file_extension: Option<&str>,
  ) -> Result<Self> {
    let path_str = path
      .to_str()
      .ok_or_else(|| return anyhow!("(ArgError) Invalid path"))?
      .to_string();

    if let Some(file_extension) = file_extension {
      if path.extension() != Some(OsStr::new(file_extension)) {
        return Err(anyhow!(
          "(ArgError) Invalid file extension on file: `{}`. Expected extension `.{}`",
          path_str,
          file_extension
        ));
      }
    }

    let content = fs::read_to_string(&path)
      .with_context(|| return format!("(IOError) [{}]", path_str))?
      .replace("\r\n", "\n");

    return Self::new(path_str, path, content);
  }
}

/// Expands directories into their files with the given extension. The result
/// is ordered by path so that output is reproducible.
pub fn read_file_list(
  paths: &[String],
  file_extension: &str,
) -> Result<Vec<FileInfo>> {
  let mut file_paths = BTreeSet::new();

  for x in paths.iter() {
    let path = PathBuf::from(x);

    if path.is_dir() {
      let dir_entries = fs::read_dir(&path)
        .with_context(|| return format!("(IOError) [{}]", x))?;

      for entry in dir_entries {
        let entry_path = entry
          .with_context(|| {
            return format!(
              "(IOError) Failed to read directory entry in `{}`",
              x
            );
          })?
          .path();

        if entry_path.is_file()
          && entry_path.extension() == Some(OsStr::new(file_extension))
        {
          file_paths.insert((entry_path, false));
        }
      }
    } else {
      file_paths.insert((path, true));
    }
  }

  if file_paths.is_empty() {
    return Err(anyhow!(
      "(ArgError) No `.{}` files found in the given paths",
      file_extension
    ));
  }

  return file_paths
    .into_iter()
    .map(|(path, check_ext)| {
      return FileInfo::from_path(path, check_ext.then_some(file_extension));
    })
    .collect();
}

pub fn dir_check(path: &Path) -> Result<&Path> {
  if !path.is_dir() {
    fs::create_dir_all(path).with_context(|| {
      return format!(
        "(IOError) Failed to create output directory `{}`",
        path.display()
      );
    })?;
    info_print!("Created output directory: `{}`", path.display());
  }

  return Ok(path);
}

/// The `--output` parameter, if given.
pub fn output_setting() -> Option<PathBuf> {
  if let Ok(Some(values)) = Setting::Output.is_set() {
    return values.first().map(PathBuf::from);
  }

  return None;
}

/// Writes through a sibling temporary file that is renamed into place, so a
/// failed write never leaves a truncated file behind under the final name.
pub fn write_file(
  file_path: PathBuf,
  content: String,
) -> Result<(PathBuf, String)> {
  let mut tmp_path = file_path.clone().into_os_string();
  tmp_path.push(".tmp");
  let tmp_path = PathBuf::from(tmp_path);

  fs::write(&tmp_path, &content).with_context(|| {
    return format!(
      "(IOError) Failed to write to file: `{}`",
      tmp_path.display()
    );
  })?;

  if let Err(e) = fs::rename(&tmp_path, &file_path) {
    let _ = fs::remove_file(&tmp_path);
    return Err(anyhow!(
      "(IOError) Failed to move `{}` into place: {}",
      file_path.display(),
      e
    ));
  }

  return Ok((file_path, content));
}

pub fn generate_output(
  programs: &[impl Serializable<Output = String>],
  files: &[FileInfo],
  output_dir: Option<&Path>,
  output_file_ext: &str,
) -> Result<Vec<(PathBuf, String)>> {
  return programs
    .iter()
    .zip(files.iter())
    .map(|(program, file)| {
      let mut file_path = file.path.with_extension(output_file_ext);

      if let Some(output_dir) = output_dir {
        let file_name = file_path
          .file_name()
          .ok_or_else(|| return anyhow!("(ArgError) No file name provided!"))?;
        file_path = output_dir.join(file_name);
      }

      return write_file(file_path, program.serialize());
    })
    .collect();
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
