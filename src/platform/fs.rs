// Platform-specific filesystem usage queries

use std::path::Path;

use crate::core::metrics::DiskSample;
use crate::error::{Result, StatusError};

/// Usage of the filesystem holding `path`, via statvfs(3)
#[cfg(unix)]
pub fn disk_usage(path: &Path) -> Result<DiskSample> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| StatusError::unavailable(format!("invalid path {:?}", path)))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        let err = std::io::Error::last_os_error();
        return Err(StatusError::unavailable(format!(
            "statvfs {:?} failed: {}",
            path, err
        )));
    }

    let block_size = stat.f_frsize as u64;
    let total = stat.f_blocks as u64 * block_size;
    let available = stat.f_bavail as u64 * block_size;

    Ok(DiskSample::from_space(total, available))
}

/// Usage of the mounted disk whose mount point is the longest prefix of `path`
#[cfg(not(unix))]
pub fn disk_usage(path: &Path) -> Result<DiskSample> {
    use sysinfo::Disks;

    let disks = Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| DiskSample::from_space(disk.total_space(), disk.available_space()))
        .ok_or_else(|| StatusError::unavailable(format!("no disk mounted at {:?}", path)))
}
