use std::fs;

use log::debug;

const PROC_STAT: &str = "/proc/stat";
const MIB: u64 = 1024 * 1024;

/// Supplies the two pre-formatted decorations shown in the prompt.
pub trait StatsSource {
    fn cpu(&mut self) -> String;
    fn memory(&mut self) -> String;
}

/// CPU share since the previous sample and current memory use.
#[derive(Debug, Default)]
pub struct SystemStats {
    prev_total: u64,
    prev_idle: u64,
}

impl SystemStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn sample_cpu(&mut self, stat_line: &str) -> String {
        let Some((total, idle)) = parse_cpu_line(stat_line) else {
            return "CPU: N/A".to_string();
        };

        let delta_total = total.wrapping_sub(self.prev_total);
        let delta_idle = idle.wrapping_sub(self.prev_idle);
        self.prev_total = total;
        self.prev_idle = idle;

        if delta_total == 0 {
            return "CPU: N/A".to_string();
        }
        let busy = delta_total.saturating_sub(delta_idle) as f64;
        format!("CPU: {:.2}%", 100.0 * busy / delta_total as f64)
    }
}

impl StatsSource for SystemStats {
    fn cpu(&mut self) -> String {
        match fs::read_to_string(PROC_STAT) {
            Ok(content) => {
                let first = content.lines().next().unwrap_or_default();
                self.sample_cpu(first)
            }
            Err(e) => {
                debug!("cannot read {}: {}", PROC_STAT, e);
                "CPU: N/A".to_string()
            }
        }
    }

    fn memory(&mut self) -> String {
        let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
        if unsafe { libc::sysinfo(&mut info) } != 0 {
            return "Mem: N/A".to_string();
        }
        let unit = u64::from(info.mem_unit.max(1));
        let total = info.totalram as u64 * unit;
        let free = info.freeram as u64 * unit;
        format!(
            "Mem: {}/{}MB",
            total.saturating_sub(free) / MIB,
            total / MIB
        )
    }
}

/// `(user + nice + system + idle, idle)` from the aggregate `cpu` line.
fn parse_cpu_line(line: &str) -> Option<(u64, u64)> {
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }
    let mut ticks = [0u64; 4];
    for tick in ticks.iter_mut() {
        *tick = fields.next()?.parse().ok()?;
    }
    let [user, nice, system, idle] = ticks;
    Some((user + nice + system + idle, idle))
}
