//! 图标文件写入

use crate::icon::build_icon;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// 一次性写入整个缓冲区，已有文件会被覆盖
///
/// 目标目录不存在、权限不足或磁盘已满时返回原始 IO 错误，不重试。
pub fn write_icon(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.flush()
}

/// 构建默认图标并写入 `path`，返回写入的字节数
pub fn generate(path: &Path) -> io::Result<usize> {
    let ico = build_icon();
    debug!("图标数据已生成: {} 字节", ico.len());

    write_icon(path, &ico)?;
    info!("图标已写入: {}", path.display());

    Ok(ico.len())
}
