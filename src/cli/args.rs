// src/cli/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use email_domains_domain::options::{DEFAULT_EMAIL_COLUMN, DEFAULT_HEADER_LABEL};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "email_domains",
    version,
    about = "顧客CSVのメールドメイン別集計ツール",
    group(
        clap::ArgGroup::new("input")
            .args(["path", "file"])
            .required(true)
            .multiple(false)
    )
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub parse: ParseOptions,

    #[command(flatten)]
    pub logging: LogOptions,

    /// 入力CSVファイル
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub path: Option<PathBuf>,

    /// 入力CSVファイル（位置引数の代替）
    #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 集計サマリ（行数・ヘッダ行数・顧客数・ドメイン数）を付加
    #[arg(long, help_heading = "出力")]
    pub summary: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ParseOptions {
    /// メールアドレス列の位置（0始まり）
    #[arg(long, default_value_t = DEFAULT_EMAIL_COLUMN, help_heading = "解析")]
    pub email_column: usize,

    /// ヘッダ行とみなすメール列の値
    #[arg(long, default_value = DEFAULT_HEADER_LABEL, help_heading = "解析")]
    pub header_label: String,

    /// 列数の異なる行を許容（各行の列数を個別に検証）
    #[arg(long, help_heading = "解析")]
    pub flexible: bool,
}

#[derive(ClapArgs, Debug)]
pub struct LogOptions {
    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace）
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short = 'q', long, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}
