use std::path::Path;

/// `<cwd> [<cpu>, <mem>]$ `. The stat strings are embedded as given.
pub fn render(cwd: &Path, cpu: &str, memory: &str) -> String {
    format!("{} [{}, {}]$ ", cwd.display(), cpu, memory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_stats_verbatim() {
        let prompt = render(Path::new("/home/user"), "CPU: 3.25%", "Mem: 812/15890MB");
        assert_eq!(prompt, "/home/user [CPU: 3.25%, Mem: 812/15890MB]$ ");

        let prompt = render(Path::new("/"), "??", "");
        assert_eq!(prompt, "/ [??, ]$ ");
    }
}
