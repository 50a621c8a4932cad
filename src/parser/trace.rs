const INDENT: &str = "\t";

/// 解析跟踪，按层级缩进记录BEGIN/END行，由[`Parser::take_trace`](super::Parser::take_trace)取出
#[derive(Debug, Clone, Default)]
pub(crate) struct Tracer {
    enabled: bool,
    level: usize,
    lines: Vec<String>,
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Tracer {
            enabled,
            ..Default::default()
        }
    }

    pub fn begin(&mut self, name: &str, literal: &str) {
        if self.enabled {
            self.level += 1;
            self.push(format!("BEGIN {} ({:?})", name, literal));
        }
    }

    pub fn end(&mut self, name: &str) {
        if self.enabled {
            self.push(format!("END {}", name));
            self.level = self.level.saturating_sub(1);
        }
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn push(&mut self, message: String) {
        let indent = INDENT.repeat(self.level.saturating_sub(1));
        self.lines.push(format!("{}{}", indent, message));
    }
}
