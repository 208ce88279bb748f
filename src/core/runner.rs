use crate::domain::model::{DecodePolicy, ProcessOutput};
use crate::domain::ports::CommandExecutor;
use crate::utils::error::{GitInitError, Result};
use std::borrow::Cow;
use std::io::Write;
use tracing::warn;

/// Runs child processes through a [`CommandExecutor`] and relays what they
/// wrote: stdout whenever it is non-empty, stderr only when the child failed.
/// Both are followed by a newline.
pub struct ProcessRunner<E, O, W> {
    executor: E,
    stdout: O,
    stderr: W,
    decode: DecodePolicy,
}

impl<E, O, W> ProcessRunner<E, O, W>
where
    E: CommandExecutor,
    O: Write,
    W: Write,
{
    pub fn new(executor: E, stdout: O, stderr: W, decode: DecodePolicy) -> Self {
        Self {
            executor,
            stdout,
            stderr,
            decode,
        }
    }

    /// Runs `argv` to completion and returns its exit code.
    pub async fn run(&mut self, argv: &[String]) -> Result<i32> {
        let output = self.executor.execute(argv).await?;
        self.relay(program_name(argv), &output)?;
        Ok(output.code)
    }

    fn relay(&mut self, program: &str, output: &ProcessOutput) -> Result<()> {
        if !output.stdout.is_empty() {
            let text = decode(&output.stdout, self.decode, program, "stdout")?;
            writeln!(self.stdout, "{}", text)?;
            self.stdout.flush()?;
        }

        // The exit code of a failed step wins over strict decoding of its stderr.
        if !output.success() {
            let text = decode(&output.stderr, self.decode, program, "stderr").unwrap_or_else(|e| {
                warn!("{}, relaying it lossily", e);
                String::from_utf8_lossy(&output.stderr)
            });
            writeln!(self.stderr, "{}", text)?;
            self.stderr.flush()?;
        }

        Ok(())
    }

    pub fn into_parts(self) -> (E, O, W) {
        (self.executor, self.stdout, self.stderr)
    }
}

fn program_name(argv: &[String]) -> &str {
    argv.first().map(String::as_str).unwrap_or_default()
}

pub fn decode<'a>(
    bytes: &'a [u8],
    policy: DecodePolicy,
    program: &str,
    stream: &'static str,
) -> Result<Cow<'a, str>> {
    match policy {
        DecodePolicy::Lossy => Ok(String::from_utf8_lossy(bytes)),
        DecodePolicy::Strict => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|_| GitInitError::Encoding {
                program: program.to_string(),
                stream,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Canned(ProcessOutput);

    #[async_trait]
    impl CommandExecutor for Canned {
        async fn execute(&self, _argv: &[String]) -> Result<ProcessOutput> {
            Ok(self.0.clone())
        }
    }

    fn runner(output: ProcessOutput, policy: DecodePolicy) -> ProcessRunner<Canned, Vec<u8>, Vec<u8>> {
        ProcessRunner::new(Canned(output), Vec::new(), Vec::new(), policy)
    }

    fn git() -> Vec<String> {
        vec!["git".to_string()]
    }

    #[test]
    fn test_stdout_relayed_on_success_stderr_dropped() {
        let mut runner = runner(
            ProcessOutput {
                code: 0,
                stdout: b"Cloning into 'theia'...".to_vec(),
                stderr: b"warning: ignored".to_vec(),
            },
            DecodePolicy::Lossy,
        );

        let code = tokio_test::block_on(runner.run(&git())).unwrap();
        let (_, out, err) = runner.into_parts();

        assert_eq!(code, 0);
        assert_eq!(out, b"Cloning into 'theia'...\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_empty_stdout_writes_nothing() {
        let mut runner = runner(ProcessOutput::default(), DecodePolicy::Lossy);

        let code = tokio_test::block_on(runner.run(&git())).unwrap();
        let (_, out, err) = runner.into_parts();

        assert_eq!(code, 0);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_relays_stderr_even_when_empty() {
        let mut runner = runner(
            ProcessOutput {
                code: 1,
                ..ProcessOutput::default()
            },
            DecodePolicy::Lossy,
        );

        let code = tokio_test::block_on(runner.run(&git())).unwrap();
        let (_, out, err) = runner.into_parts();

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, b"\n");
    }

    #[test]
    fn test_lossy_decoding_replaces_invalid_bytes() {
        let text = decode(b"caf\xe9", DecodePolicy::Lossy, "git", "stdout").unwrap();
        assert_eq!(text, "caf\u{fffd}");
    }

    #[test]
    fn test_strict_decoding_rejects_invalid_bytes() {
        let mut runner = runner(
            ProcessOutput {
                code: 0,
                stdout: b"caf\xe9".to_vec(),
                stderr: Vec::new(),
            },
            DecodePolicy::Strict,
        );

        let err = tokio_test::block_on(runner.run(&git())).unwrap_err();
        match err {
            GitInitError::Encoding { program, stream } => {
                assert_eq!(program, "git");
                assert_eq!(stream, "stdout");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_policy_keeps_exit_code_of_failed_step() {
        let mut runner = runner(
            ProcessOutput {
                code: 128,
                stdout: Vec::new(),
                stderr: b"fatal: d\xe9p\xf4t introuvable".to_vec(),
            },
            DecodePolicy::Strict,
        );

        let code = tokio_test::block_on(runner.run(&git())).unwrap();
        let (_, _, err) = runner.into_parts();

        assert_eq!(code, 128);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "fatal: d\u{fffd}p\u{fffd}t introuvable\n"
        );
    }

    #[test]
    fn test_strict_decoding_accepts_utf8() {
        let text = decode("grüße".as_bytes(), DecodePolicy::Strict, "git", "stderr").unwrap();
        assert_eq!(text, "grüße");
    }
}
