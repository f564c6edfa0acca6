//! Job log sink
//!
//! The engine collects one human readable line per plugin decision into the
//! job's report. Plugins write to it through [`JobLog`] instead of reaching
//! for a global logger.

/// Line-oriented log sink provided by the host
pub trait JobLog {
    fn log(&mut self, line: &str);
}

/// Forwards every job log line to `tracing` under the `job` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJobLog;

impl JobLog for TracingJobLog {
    fn log(&mut self, line: &str) {
        tracing::info!(target: "job", "{}", line);
    }
}

/// Keeps job log lines in memory, optionally tracing them as well.
#[derive(Debug, Default, Clone)]
pub struct MemoryJobLog {
    lines: Vec<String>,
    tracer: Option<TracingJobLog>,
}

impl MemoryJobLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that records lines and also emits them through `tracing`
    pub fn traced() -> Self {
        Self {
            lines: Vec::new(),
            tracer: Some(TracingJobLog),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl JobLog for MemoryJobLog {
    fn log(&mut self, line: &str) {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.log(line);
        }
        self.lines.push(line.to_string());
    }
}
