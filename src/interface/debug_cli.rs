//! 文字 CLI：读取 stdin → 解析命令 → 转成背包事件

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::{catalog::ItemTable, schema::ItemEntry};
use crate::inventory::components::ItemCategory;
use crate::inventory::events::*;
use crate::inventory::sort::SortMode;
use crate::inventory::store::InventoryStore;

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

const HELP: &str = "命令列表:
  help                          查看帮助
  status                        查看当前状态
  exit / quit                   退出程序
  items [token]                 列出物品 / 用 id、uuid、名称查询
  give <id> <count> [start]     从 start 格往后放入
  put <id> <count> <index>      只放入指定格子
  take <id> <index> <count>     从指定格子取出
  swap <category> <a> <b>       交换两个格子
  sort <category> [mode]        整理 (name | name-desc | qty | qty-desc)
  resize <category> [size]      调整容量（截断会丢弃物品）
  inventory [category]          查看背包
  dump [category]               以 JSON 查看背包";

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match buffer.lock() {
                        Ok(mut buf) => buf.push_back(line.to_string()),
                        Err(_) => break,
                    }
                }
            });
        }
        app
            .add_event::<CliLine>()
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands.run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>),
    Give { id: String, count: u32, start: usize },
    Put { id: String, count: u32, index: usize },
    Take { id: String, index: usize, count: u32 },
    Swap { category: ItemCategory, a: usize, b: usize },
    Sort { category: ItemCategory, mode: SortMode },
    Resize { category: ItemCategory, size: Option<usize> },
    Inventory { category: Option<ItemCategory>, format: ListFormat },
    /// 参数不对，带提示
    Invalid(String),
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    table: Option<Res<ItemTable>>,
    store: Option<Res<InventoryStore>>,
    mut ev_add: EventWriter<AddItemEvent>,
    mut ev_remove: EventWriter<RemoveItemEvent>,
    mut ev_swap: EventWriter<SwapSlotsEvent>,
    mut ev_sort: EventWriter<SortInventoryEvent>,
    mut ev_resize: EventWriter<ResizeInventoryEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(HELP.into()));
            }

            Command::Status => {
                let cnt = table.as_ref().map_or(0, |t| t.len());
                let categories = store.as_ref().map(|s| s.categories()).unwrap_or_default();
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {cnt}, Inventories: {categories:?}",
                    state.get(),
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(token) => {
                let Some(table) = table.as_deref() else {
                    log.write(LogEvent("物品表尚未加载".into()));
                    continue;
                };
                match token {
                    None => {
                        for entry in table.entries() {
                            log.write(LogEvent(format!(
                                "{} | {} | {} | {} | 堆叠 {}",
                                uuid_from_id(&entry.id),
                                entry.id,
                                entry.name,
                                entry.category,
                                entry.stack_size
                            )));
                        }
                    }
                    Some(t) => match lookup(table, &t) {
                        Some(e) => {
                            log.write(LogEvent(describe(e)));
                        }
                        None => {
                            log.write(LogEvent("未找到匹配物品".into()));
                        }
                    },
                }
            }

            Command::Give { id, count, start } => {
                ev_add.write(AddItemEvent {
                    id,
                    count,
                    category: None,
                    placement: Placement::Anywhere { start },
                });
            }

            Command::Put { id, count, index } => {
                ev_add.write(AddItemEvent {
                    id,
                    count,
                    category: None,
                    placement: Placement::AtIndex(index),
                });
            }

            Command::Take { id, index, count } => {
                ev_remove.write(RemoveItemEvent {
                    id,
                    category: None,
                    index,
                    count,
                });
            }

            Command::Swap { category, a, b } => {
                ev_swap.write(SwapSlotsEvent { category, a, b });
            }

            Command::Sort { category, mode } => {
                ev_sort.write(SortInventoryEvent { category, mode });
            }

            Command::Resize { category, size } => {
                ev_resize.write(ResizeInventoryEvent {
                    category,
                    capacity: size,
                });
            }

            Command::Inventory { category, format } => {
                ev_list.write(ListInventoryEvent { category, format });
            }

            Command::Invalid(usage) => {
                log.write(LogEvent(format!("用法: {usage}")));
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let args: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => Command::Items(args.first().map(|s| s.to_string())),
        "give" => match (args.first(), arg(&args, 1, 1), arg(&args, 2, 0)) {
            (Some(id), Some(count), Some(start)) => Command::Give {
                id: id.to_string(),
                count,
                start,
            },
            _ => Command::Invalid("give <id> <count> [start]".into()),
        },
        "put" => match (args.first(), req(&args, 1), req(&args, 2)) {
            (Some(id), Some(count), Some(index)) => Command::Put {
                id: id.to_string(),
                count,
                index,
            },
            _ => Command::Invalid("put <id> <count> <index>".into()),
        },
        "take" => match (args.first(), req(&args, 1), req(&args, 2)) {
            (Some(id), Some(index), Some(count)) => Command::Take {
                id: id.to_string(),
                index,
                count,
            },
            _ => Command::Invalid("take <id> <index> <count>".into()),
        },
        "swap" => match (req(&args, 0), req(&args, 1), req(&args, 2)) {
            (Some(category), Some(a), Some(b)) => Command::Swap { category, a, b },
            _ => Command::Invalid("swap <category> <a> <b>".into()),
        },
        "sort" => match (req(&args, 0), arg(&args, 1, SortMode::default())) {
            (Some(category), Some(mode)) => Command::Sort { category, mode },
            _ => Command::Invalid("sort <category> [name|name-desc|qty|qty-desc]".into()),
        },
        "resize" => {
            let size = match args.get(1) {
                None => Some(None),
                Some(s) => s.parse().ok().map(Some),
            };
            match (req(&args, 0), size) {
                (Some(category), Some(size)) => Command::Resize { category, size },
                _ => Command::Invalid("resize <category> [size]".into()),
            }
        }
        "inventory" | "inv" | "dump" => {
            let format = if cmd == "dump" {
                ListFormat::Json
            } else {
                ListFormat::Text
            };
            match args.first().map(|s| s.parse::<ItemCategory>()) {
                None => Command::Inventory {
                    category: None,
                    format,
                },
                Some(Ok(category)) => Command::Inventory {
                    category: Some(category),
                    format,
                },
                Some(Err(e)) => Command::Invalid(format!("{cmd} [category] ({e})")),
            }
        }
        other => Command::Unsupported(other.into()),
    }
}

/// 必填参数
fn req<T: FromStr>(args: &[&str], idx: usize) -> Option<T> {
    args.get(idx)?.parse().ok()
}

/// 可选参数：缺省用 default，写了但解析失败返回 None
fn arg<T: FromStr>(args: &[&str], idx: usize, default: T) -> Option<T> {
    match args.get(idx) {
        None => Some(default),
        Some(s) => s.parse().ok(),
    }
}

/// 按 id / 名称 / uuid 查询
fn lookup<'a>(table: &'a ItemTable, token: &str) -> Option<&'a ItemEntry> {
    table.find(token).or_else(|| {
        let t_low = token.to_lowercase();
        table
            .entries()
            .into_iter()
            .find(|e| uuid_from_id(&e.id).to_string() == t_low)
    })
}

fn describe(e: &ItemEntry) -> String {
    format!(
        "==================================================
UUID     : {}
ID       : {}
Name     : {}
Category : {}
Stack    : {}
{}
==================================================",
        uuid_from_id(&e.id),
        e.id,
        e.name,
        e.category,
        e.stack_size,
        e.description
    )
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}
