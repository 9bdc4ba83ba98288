use std::path::{Path, PathBuf};
use std::time::Instant;

use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::error::AirwaveError;

pub const MAX_OUTPUT_BYTES: usize = 1024 * 1024; // 1MB; a full iw scan on a crowded band stays well under this

/// Locates an executable on the search path.
///
/// Injectable so tests can simulate tool presence/absence without
/// depending on what the host has installed.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Default locator: searches the directories in `$PATH`.
pub struct PathLocator {
    dirs: Vec<PathBuf>,
}

impl PathLocator {
    pub fn from_env() -> Self {
        let dirs = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    /// Search a fixed directory list instead of `$PATH`.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(tool))
            .find(|path| is_executable(path))
    }
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// One candidate in a fallback chain: a tool name and its argument list.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub tool: &'static str,
    pub args: Vec<String>,
}

/// Captured stdout plus which tool in the chain produced it; the caller
/// picks the matching parser from this.
#[derive(Debug)]
pub struct ToolOutput {
    pub tool: &'static str,
    pub stdout: String,
}

/// Executes external inspection utilities with a timeout and bounded
/// output capture. One child process per call, no other state.
pub struct CommandRunner {
    locator: Box<dyn ToolLocator>,
    timeout: std::time::Duration,
}

impl CommandRunner {
    pub fn new(locator: Box<dyn ToolLocator>, timeout: std::time::Duration) -> Self {
        Self { locator, timeout }
    }

    /// Run the first candidate whose executable is on the path.
    ///
    /// Later candidates are never consulted once one is found: a failure
    /// of the chosen tool is reported, not papered over by the fallback.
    /// If no candidate is present, returns [`AirwaveError::ToolNotFound`]
    /// without spawning anything.
    pub async fn run_first(&self, candidates: &[Invocation]) -> Result<ToolOutput, AirwaveError> {
        let Some((chosen, path)) = candidates
            .iter()
            .find_map(|c| self.locator.locate(c.tool).map(|p| (c, p)))
        else {
            return Err(AirwaveError::ToolNotFound {
                tried: candidates.iter().map(|c| c.tool.to_string()).collect(),
            });
        };

        let stdout = self.run_one(chosen.tool, &path, &chosen.args).await?;
        Ok(ToolOutput {
            tool: chosen.tool,
            stdout,
        })
    }

    /// Spawn one tool and capture its stdout.
    ///
    /// - No shell: `Command::new` + `.args()`, nothing interpolated.
    /// - `process_group(0)` + `kill_on_drop(true)`: the child is its own
    ///   group leader, so timeout kills take grandchildren with it.
    /// - Output capped at [`MAX_OUTPUT_BYTES`] per stream.
    async fn run_one(
        &self,
        tool: &str,
        path: &Path,
        args: &[String],
    ) -> Result<String, AirwaveError> {
        let start = Instant::now();

        let mut cmd = Command::new(path);
        cmd.args(args)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .process_group(0)
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| AirwaveError::Other(format!("failed to spawn {tool}: {e}")))?;

        let child_pid = child.id();
        let stdout_pipe = child.stdout.take().expect("stdout was piped");
        let stderr_pipe = child.stderr.take().expect("stderr was piped");

        let read_future = async {
            let mut stdout_task = tokio::spawn(read_capped(stdout_pipe));
            let mut stderr_task = tokio::spawn(read_capped(stderr_pipe));

            // If either stream hits the cap the child may be blocked on a
            // full pipe; kill the whole group so the sibling reader sees
            // EOF instead of waiting forever.
            let (stdout_buf, stderr_buf) = tokio::select! {
                res = &mut stdout_task => {
                    let buf = res.unwrap_or_default();
                    if buf.len() >= MAX_OUTPUT_BYTES {
                        kill_group(child_pid);
                    }
                    let stderr_buf = stderr_task.await.unwrap_or_default();
                    (buf, stderr_buf)
                }
                res = &mut stderr_task => {
                    let buf = res.unwrap_or_default();
                    if buf.len() >= MAX_OUTPUT_BYTES {
                        kill_group(child_pid);
                    }
                    let stdout_buf = stdout_task.await.unwrap_or_default();
                    (stdout_buf, buf)
                }
            };
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((stdout_buf, stderr_buf, status))
        };

        let (stdout, stderr_raw, status) =
            match tokio::time::timeout(self.timeout, read_future).await {
                Ok(result) => result.map_err(|e| {
                    AirwaveError::Other(format!("failed to read from {tool}: {e}"))
                })?,
                Err(_) => {
                    kill_group(child_pid);
                    return Err(AirwaveError::Timeout(start.elapsed().as_millis() as u64));
                }
            };

        let stderr_text = String::from_utf8_lossy(&stderr_raw).to_string();

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            tracing::warn!(tool, code, "tool invocation failed");
            return Err(AirwaveError::ExecutionFailed {
                tool: tool.to_string(),
                code,
                stderr: stderr_text,
            });
        }

        // Wireless tools chatter on stderr even on success.
        if !stderr_text.is_empty() {
            tracing::debug!(tool, stderr = %stderr_text, "tool stderr output");
        }

        Ok(String::from_utf8_lossy(&stdout).to_string())
    }
}

async fn read_capped<R>(pipe: R) -> Vec<u8>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    let mut buf = Vec::with_capacity(64 * 1024);
    let mut capped = pipe.take(MAX_OUTPUT_BYTES as u64);
    if let Err(e) = capped.read_to_end(&mut buf).await {
        tracing::warn!("pipe read error: {e}");
    }
    buf
}

/// SIGKILL the whole process group. `process_group(0)` made the child its
/// own group leader (pgid == pid), so this reaches grandchildren holding
/// the pipes open.
fn kill_group(pid: Option<u32>) {
    if let Some(pid) = pid {
        unsafe {
            libc::kill(-(pid as i32), libc::SIGKILL);
        }
    }
}
