use closed_list::ClosedList;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub interval: Duration,
    pub step: isize,
}

/// 定时打印游标附近的元素并向前移动游标，直到按下回车、stdin 关闭或收到 Ctrl-C
pub async fn run<L>(mut list: L, config: Config) -> anyhow::Result<()>
where
    L: ClosedList<String>,
{
    list.on_head_reached(|head| println!("Head reached! Head: {head}"));

    let mut interval = tokio::time::interval(config.interval);
    // 第一次 tick 立即完成，跳过它使第一次打印发生在一个间隔之后
    interval.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Press Enter to stop");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                println!("{}", describe(&list));
                list.move_back(config.step);
            }
            line = lines.next_line() => {
                match line? {
                    Some(_) => log::info!("stop requested by key press"),
                    None => log::info!("stdin closed, stopping"),
                }
                break;
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                log::info!("interrupted");
                break;
            }
        }
    }

    log::info!("demo finished at position {:?}", list.position());
    Ok(())
}

pub fn describe<L: ClosedList<String>>(list: &L) -> String {
    format!(
        "Previous: {}, Current: {}, Next: {}",
        show(list.previous()),
        show(list.current()),
        show(list.next())
    )
}

fn show(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or_default()
}
