use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use zonerelay_application::use_cases::AddZoneRecordUseCase;

const MENU: &str = "\n1) Add zone record\n2) Stop server and exit\n> ";
const RECORD_PROMPT: &str = "Record (<name> <type> <value>): ";

/// Line-oriented operator menu. Option `2` cancels `shutdown`; end of input
/// only ends the menu and leaves the server running.
pub struct AdminConsole<R, W> {
    reader: R,
    writer: W,
    add_record: Arc<AddZoneRecordUseCase>,
    shutdown: CancellationToken,
}

impl<R, W> AdminConsole<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        reader: R,
        writer: W,
        add_record: Arc<AddZoneRecordUseCase>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            reader,
            writer,
            add_record,
            shutdown,
        }
    }

    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write(MENU).await?;

            let Some(choice) = self.read_line().await? else {
                info!("Console input closed, server keeps running");
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    if !self.add_record().await? {
                        info!("Console input closed, server keeps running");
                        return Ok(());
                    }
                }
                "2" => {
                    self.write("Stopping server\n").await?;
                    self.shutdown.cancel();
                    return Ok(());
                }
                other => {
                    self.write(&format!("Invalid option '{}'\n", other)).await?;
                }
            }
        }
    }

    /// Returns `false` when input ended at the prompt.
    async fn add_record(&mut self) -> io::Result<bool> {
        self.write(RECORD_PROMPT).await?;

        let Some(line) = self.read_line().await? else {
            return Ok(false);
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, record_type, value] = fields.as_slice() else {
            self.write("Expected three fields: <name> <type> <value>\n")
                .await?;
            return Ok(true);
        };

        match self.add_record.execute(name, record_type, value).await {
            Ok(record) => {
                let message = format!(
                    "Added {} IN {} {}\n",
                    record.name, record.record_type, record.value
                );
                self.write(&message).await?;
            }
            Err(e) => {
                warn!(error = %e, "Admin record add rejected");
                self.write(&format!("Failed to add record: {}\n", e))
                    .await?;
            }
        }

        Ok(true)
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        Ok((read > 0).then_some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
