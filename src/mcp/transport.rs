//! Newline-delimited stdio transport.
//!
//! One JSON-RPC message per line on stdin and stdout. stdout carries protocol
//! traffic only; logs go to stderr.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::mcp::protocol::{JsonRpcError, JsonRpcResponse};

/// Line-oriented reader and writer over the process's standard streams.
pub struct StdioTransport {
    reader: BufReader<Stdin>,
    writer: Stdout,
}

impl StdioTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }

    /// Reads the next line with its line terminator removed.
    ///
    /// Returns `None` once stdin reaches end of file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes a success response as a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> io::Result<()> {
        self.write_message(response).await
    }

    /// Writes an error response as a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_error(&mut self, error: &JsonRpcError) -> io::Result<()> {
        self.write_message(error).await
    }

    async fn write_message<T: Serialize>(&mut self, message: &T) -> io::Result<()> {
        let mut line = encode_line(message)?;
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact JSON never contains a raw newline, so each message is one line.
fn encode_line<T: Serialize>(message: &T) -> io::Result<String> {
    serde_json::to_string(message).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::RequestId;
    use serde_json::json;

    #[test]
    fn multiline_content_stays_on_one_line() {
        let response = JsonRpcResponse::success(
            RequestId::Number(1),
            json!({
                "content": [{ "type": "text", "text": "line one\nline two" }],
                "nested": { "key": "value" }
            }),
        );
        let line = encode_line(&response).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains(r"line one\nline two"));
    }

    #[test]
    fn error_encodes_on_one_line() {
        let error = JsonRpcError::method_not_found(RequestId::String("x".into()), "a/b");
        assert!(!encode_line(&error).unwrap().contains('\n'));
    }
}
