use clap::{Parser, ValueEnum};
use closed_list::{ContiguousClosedList, LinkedClosedList};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod demo;
pub mod words;

#[derive(Parser, Debug)]
#[command(about = "Walks a closed list of random words until Enter is pressed")]
struct ProgramArgs {
    /// 生成的单词数量
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// 打印间隔（毫秒）
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
    /// 每次打印后 move_back 的步数，负数表示向后移动
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    step: isize,
    #[arg(long, value_enum, default_value_t = Backend::Linked)]
    backend: Backend,
    /// log4rs 配置文件，不存在时输出到 stderr
    #[arg(long, default_value = "conf/log4rs.yaml")]
    log_config: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Linked,
    Contiguous,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ProgramArgs::parse();
    init_logger(&args.log_config)?;

    log::info!("starting closed list demo: {args:?}");
    let words = words::hacker_nouns(&mut rand::thread_rng(), args.count);
    let config = demo::Config {
        interval: Duration::from_millis(args.interval_ms),
        step: args.step,
    };

    let result = match args.backend {
        Backend::Linked => demo::run(LinkedClosedList::from(words), config).await,
        Backend::Contiguous => demo::run(ContiguousClosedList::from(words), config).await,
    };

    if let Err(e) = &result {
        log::error!("closed list demo fail: {e} {}", e.backtrace());
    }
    result
}

fn init_logger(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return log4rs::init_file(path, Default::default());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;

    log::warn!("log config {} not found, logging to stderr", path.display());
    Ok(())
}
