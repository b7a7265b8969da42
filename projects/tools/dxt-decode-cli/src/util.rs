#![cfg(not(tarpaulin_include))]

use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Opens a file in read-only mode and returns a handle.
///
/// # Returns
///
/// A read-only file handle on success, or a [`CliError`] if the file cannot be opened.
#[inline(always)]
pub fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, CliError> {
    ReadOnlyFileHandle::open(path).map_err(|e| CliError::MmapError(e.to_string()))
}

/// Retrieves the size of the file for a given handle.
#[inline(always)]
pub fn get_file_size(handle: &ReadOnlyFileHandle) -> Result<usize, CliError> {
    handle
        .size()
        .map(|size| size as usize)
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Creates a memory mapping over the first `len` bytes of a file opened for reading.
///
/// Returns [`None`] for `len == 0`, since empty mappings cannot be created.
#[inline(always)]
pub fn open_readonly_mmap(
    handle: &ReadOnlyFileHandle,
    len: usize,
) -> Result<Option<ReadOnlyMmap<'_>>, CliError> {
    if len == 0 {
        return Ok(None);
    }

    ReadOnlyMmap::new(handle, 0, len)
        .map(Some)
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Creates (or truncates) a file at `path`, preallocated to `len` bytes.
#[inline(always)]
pub fn open_write_handle(path: &Path, len: usize) -> Result<ReadWriteFileHandle, CliError> {
    ReadWriteFileHandle::create_preallocated(path, len as i64)
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Creates a memory mapping for writing over the first `len` bytes of a file.
///
/// Returns [`None`] for `len == 0`.
#[inline(always)]
pub fn create_output_mapping(
    handle: &ReadWriteFileHandle,
    len: usize,
) -> Result<Option<ReadWriteMmap<'_>>, CliError> {
    if len == 0 {
        return Ok(None);
    }

    ReadWriteMmap::new(handle, 0, len)
        .map(Some)
        .map_err(|e| CliError::MmapError(e.to_string()))
}
