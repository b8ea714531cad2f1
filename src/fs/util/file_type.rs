use derive_more::Display;
use libc::mode_t;

/// The kind of object a path or directory entry refers to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    #[display("block device")]
    BlockDevice,
    #[display("character device")]
    CharDevice,
    #[display("directory")]
    Directory,
    #[display("fifo")]
    Fifo,
    #[display("symlink")]
    Symlink,
    #[display("regular file")]
    Regular,
    #[display("socket")]
    Socket,
    #[display("unknown file type")]
    Other,
}

impl FileType {
    /// Decodes the `S_IFMT` bits of `st_mode`.
    pub(crate) const fn from_stat_mode(st_mode: mode_t) -> FileType {
        match st_mode & libc::S_IFMT {
            libc::S_IFBLK => FileType::BlockDevice,
            libc::S_IFCHR => FileType::CharDevice,
            libc::S_IFDIR => FileType::Directory,
            libc::S_IFIFO => FileType::Fifo,
            libc::S_IFLNK => FileType::Symlink,
            libc::S_IFREG => FileType::Regular,
            libc::S_IFSOCK => FileType::Socket,
            _ => FileType::Other,
        }
    }

    /// Interprets the type hint in a directory entry. `None` if the file system didn't provide one.
    pub(crate) const fn from_dirent_type(d_type: u8) -> Option<FileType> {
        // Each DT_* constant is the matching S_IF* constant shifted down by 12 bits.
        match d_type {
            libc::DT_UNKNOWN => None,
            hint => Some(FileType::from_stat_mode((hint as mode_t) << 12)),
        }
    }
}
