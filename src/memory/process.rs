// Tue Aug 25 2026 - Alex

use crate::memory::{maps, Address, MemoryError, ProcessSource, RegionDescriptor};
use libc::{c_void, iovec, pid_t};
use std::fs;
use std::path::PathBuf;

/// Handle to a live process, opened with query + read capability and scoped
/// to one scan pass. Opening probes that the target exists and that its
/// memory map is readable; every later read goes through process_vm_readv.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: pid_t,
    exe: Option<String>,
}

impl ProcessHandle {
    pub fn open(pid: pid_t) -> Result<Self, MemoryError> {
        if pid <= 0 {
            return Err(MemoryError::ProcessNotFound(pid));
        }

        match fs::File::open(Self::maps_path(pid)) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MemoryError::ProcessNotFound(pid));
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(MemoryError::PermissionDenied(pid));
            }
            Err(e) => return Err(MemoryError::Io(e)),
        }

        let exe = fs::read_link(format!("/proc/{}/exe", pid))
            .ok()
            .map(|p| p.to_string_lossy().into_owned());

        Ok(Self { pid, exe })
    }

    pub fn pid(&self) -> pid_t {
        self.pid
    }

    pub fn exe(&self) -> Option<&str> {
        self.exe.as_deref()
    }

    fn maps_path(pid: pid_t) -> PathBuf {
        PathBuf::from(format!("/proc/{}/maps", pid))
    }
}

impl ProcessSource for ProcessHandle {
    fn regions(&self) -> Result<Vec<RegionDescriptor>, MemoryError> {
        let contents = match fs::read_to_string(Self::maps_path(self.pid)) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // target exited between open and enumerate
                return Ok(Vec::new());
            }
            Err(e) => return Err(MemoryError::Io(e)),
        };
        maps::parse_maps(&contents, self.exe.as_deref())
    }

    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        if len == 0 {
            return Ok(Vec::new());
        }

        let mut buffer = vec![0u8; len];
        let local = iovec {
            iov_base: buffer.as_mut_ptr() as *mut c_void,
            iov_len: len,
        };
        let remote = iovec {
            iov_base: addr.as_u64() as *mut c_void,
            iov_len: len,
        };

        let copied = unsafe { libc::process_vm_readv(self.pid, &local, 1, &remote, 1, 0) };
        if copied < 0 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            return Err(MemoryError::ReadFailed(addr.as_u64(), errno));
        }

        buffer.truncate(copied as usize);
        Ok(buffer)
    }
}
