use crate::core::{ConfigProvider, DefangReport, InputLine, LoadOutcome, Mode, Pipeline, Storage};
use crate::utils::error::{DefangError, Result};
use crate::utils::validation::validate_ipv4;

pub const ARGS_SOURCE: &str = "args";

pub struct DefangPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DefangPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render(&self, report: &DefangReport) -> Result<String> {
        match self.config.output_format() {
            "json" => {
                let mut rendered = serde_json::to_string_pretty(report)?;
                rendered.push('\n');
                Ok(rendered)
            }
            _ => Ok(report.to_text()),
        }
    }
}

/// 切分輸入內容，略過開頭 BOM 與空白行，行號從 1 起算
pub fn split_lines(source_name: &str, content: &str) -> Vec<InputLine> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let text = raw.trim();
            if text.is_empty() {
                return None;
            }
            Some(InputLine {
                source_name: source_name.to_string(),
                line: idx + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DefangPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputLine>> {
        let mut lines = Vec::new();

        for (idx, address) in self.config.addresses().iter().enumerate() {
            let text = address.trim();
            if text.is_empty() {
                continue;
            }
            lines.push(InputLine {
                source_name: ARGS_SOURCE.to_string(),
                line: idx + 1,
                text: text.to_string(),
            });
        }

        for file in self.config.input_files() {
            tracing::debug!("Reading addresses from: {}", file);
            let bytes = self.storage.read_file(file).await?;
            let content = String::from_utf8(bytes).map_err(|e| {
                DefangError::InvalidEncodingError {
                    source_name: file.to_string(),
                    reason: e.utf8_error().to_string(),
                }
            })?;
            let file_lines = split_lines(file, &content);
            tracing::debug!("Read {} lines from {}", file_lines.len(), file);
            lines.extend(file_lines);
        }

        Ok(lines)
    }

    async fn transform(&self, lines: Vec<InputLine>) -> Result<DefangReport> {
        let mode = self.config.mode();
        let mut report = DefangReport::new(mode);

        for input in lines {
            let (transformed, replacements) = mode.apply(&input.text);

            if self.config.strict() {
                // 一律以還原後的形式驗證
                let fanged = match mode {
                    Mode::Defang => &input.text,
                    Mode::Refang => &transformed,
                };
                validate_ipv4(&input.source_name, input.line, fanged)?;
            }

            tracing::debug!(
                "{} {}:{} '{}' -> '{}'",
                mode,
                input.source_name,
                input.line,
                input.text,
                transformed
            );
            report.push(input.text, transformed, replacements);
        }

        Ok(report)
    }

    async fn load(&self, report: &DefangReport) -> Result<LoadOutcome> {
        let rendered = self.render(report)?;

        match self.config.output_path() {
            Some(path) if path.is_empty() => Err(DefangError::InvalidConfigValueError {
                field: "output_path".to_string(),
                value: path.to_string(),
                reason: "Path cannot be empty".to_string(),
            }),
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(LoadOutcome::Written(path.to_string()))
            }
            None => Ok(LoadOutcome::Rendered(rendered)),
        }
    }
}
