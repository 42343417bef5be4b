// Tue Aug 25 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Protection {
    None,
    Read,
    Write,
    ReadWrite,
    Execute,
    ReadExecute,
    WriteExecute,
    ReadWriteExecute,
}

impl Protection {
    /// Parse the permission column of a maps entry, e.g. "r-xp".
    pub fn from_perms(perms: &str) -> Self {
        let mut bytes = perms.bytes();
        let r = bytes.next() == Some(b'r');
        let w = bytes.next() == Some(b'w');
        let x = bytes.next() == Some(b'x');
        Self::from_rwx(r, w, x)
    }

    pub fn from_rwx(r: bool, w: bool, x: bool) -> Self {
        match (r, w, x) {
            (false, false, false) => Self::None,
            (true, false, false) => Self::Read,
            (false, true, false) => Self::Write,
            (true, true, false) => Self::ReadWrite,
            (false, false, true) => Self::Execute,
            (true, false, true) => Self::ReadExecute,
            (false, true, true) => Self::WriteExecute,
            (true, true, true) => Self::ReadWriteExecute,
        }
    }

    pub fn can_read(self) -> bool {
        matches!(
            self,
            Self::Read | Self::ReadWrite | Self::ReadExecute | Self::ReadWriteExecute
        )
    }

    pub fn can_write(self) -> bool {
        matches!(
            self,
            Self::Write | Self::ReadWrite | Self::WriteExecute | Self::ReadWriteExecute
        )
    }

    pub fn can_execute(self) -> bool {
        matches!(
            self,
            Self::Execute | Self::ReadExecute | Self::WriteExecute | Self::ReadWriteExecute
        )
    }

    pub fn is_no_access(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = if self.can_read() { 'r' } else { '-' };
        let w = if self.can_write() { 'w' } else { '-' };
        let x = if self.can_execute() { 'x' } else { '-' };
        write!(f, "{}{}{}", r, w, x)
    }
}
