//! 命令行入口

use crate::config::{GenConfig, OUTPUT_ENV};
use crate::writer::generate;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "icogen")]
#[command(about = "Write the placeholder 16x16 application icon (icon.ico)")]
pub struct Cli {
    /// 图标输出路径，未指定时读取环境变量或配置文件
    #[arg(env = OUTPUT_ENV)]
    pub output: Option<PathBuf>,
}

/// 生成图标并向 `out` 输出一行确认信息，返回实际写入的路径
pub fn run(output: Option<PathBuf>, config: &GenConfig, out: &mut impl Write) -> Result<PathBuf> {
    let path = config.resolve_output(output);
    tracing::debug!("输出路径: {}", path.display());

    generate(&path).with_context(|| format!("写入图标失败: {}", path.display()))?;

    writeln!(out, "Created icon file: {}", path.display())?;
    Ok(path)
}
