//! Voxwrite - 文本转语音文件
//!
//! 用法:
//!   voxwrite [--config <path>] [--voice <id>] [--random-voice] <output-path> [text...]
//!
//! 未给出 text 时从标准输入读取

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncReadExt;
use voxwrite::application::{SynthesizeSpeech, SynthesizeSpeechHandler};
use voxwrite::config::{load_config_from_path, print_config};
use voxwrite::infrastructure::{build_tts_engine, FileAudioWriter};

/// 将文本合成为语音并写入文件
#[derive(Parser, Debug)]
#[command(name = "voxwrite", version, about, long_about = None)]
struct CliArgs {
    /// 配置文件路径（默认搜索 config.toml / config.local.toml）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 指定音色，覆盖配置中的默认音色
    #[arg(long)]
    voice: Option<String>,

    /// 从音色目录中随机选择音色
    #[arg(long)]
    random_voice: bool,

    /// 输出音频文件路径
    output_path: PathBuf,

    /// 要合成的文本，省略时从标准输入读取
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},voxwrite={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    print_config(&config);

    let text = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read text from stdin")?;
        buf
    };

    let tts_engine = build_tts_engine(&config.tts)?;
    let handler = SynthesizeSpeechHandler::new(tts_engine, Arc::new(FileAudioWriter::new()))
        .with_enforce_max_chars(config.tts.enforce_max_chars);

    let mut command = SynthesizeSpeech::new(text, cli.output_path).with_random_voice(cli.random_voice);
    command.voice = cli.voice;

    let response = handler.handle(command).await?;

    tracing::info!(
        path = %response.output_path.display(),
        voice = %response.voice,
        bytes = response.bytes_written,
        "Done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_and_text() {
        let cli = CliArgs::try_parse_from(["voxwrite", "out.mp3", "hello", "world"]).unwrap();
        assert_eq!(cli.output_path, PathBuf::from("out.mp3"));
        assert_eq!(cli.text, vec!["hello", "world"]);
        assert!(!cli.random_voice);
    }

    #[test]
    fn test_parse_flags() {
        let cli = CliArgs::try_parse_from([
            "voxwrite",
            "--config",
            "tts.toml",
            "--voice=nova",
            "--random-voice",
            "out.mp3",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tts.toml")));
        assert_eq!(cli.voice.as_deref(), Some("nova"));
        assert!(cli.random_voice);
        assert!(cli.text.is_empty());
    }

    #[test]
    fn test_text_may_start_with_dashes() {
        let cli =
            CliArgs::try_parse_from(["voxwrite", "out.mp3", "--", "--flag-like text"]).unwrap();
        assert_eq!(cli.output_path, PathBuf::from("out.mp3"));
        assert_eq!(cli.text, vec!["--flag-like text"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::try_parse_from(["voxwrite", "--random-voice"]).is_err());
        assert!(CliArgs::try_parse_from(["voxwrite", "--bogus", "out.mp3"]).is_err());
        assert!(CliArgs::try_parse_from(["voxwrite", "--voice"]).is_err());
    }

    #[test]
    fn test_help_is_available() {
        let err = CliArgs::try_parse_from(["voxwrite", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
