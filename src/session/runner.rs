use anyhow::Result;
use tracing::debug;

use super::operator::{LanguageChoice, Operator};
use super::ui;
use crate::gateway::{Answer, GatewayError, QaGateway, TranslationGateway};
use crate::ui::Spinner;

/// Language the QA project answers in.
pub const DEFAULT_LANGUAGE: &str = "en";

/// An interactive question-answering session.
///
/// Provides a REPL-style loop: read a question, look up the ranked answers,
/// print them highlighted. When the session language is not English the
/// question is translated to English first and every answer is translated
/// back, in the order the service returned them.
pub struct Session<O, Q, T> {
    operator: O,
    qa: Q,
    translator: T,
    preset_language: Option<String>,
    language: String,
}

impl<O, Q, T> Session<O, Q, T>
where
    O: Operator,
    Q: QaGateway,
    T: TranslationGateway,
{
    /// Creates a new session. A preset language skips the interactive
    /// language selection.
    pub fn new(operator: O, qa: Q, translator: T, preset_language: Option<String>) -> Self {
        Self {
            operator,
            qa,
            translator,
            preset_language,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let Some(language) = self.select_language().await? else {
            ui::print_shutdown();
            return Ok(());
        };
        self.language = language;
        debug!(language = %self.language, "session language selected");

        loop {
            let Some(question) = self.operator.ask_question()? else {
                break;
            };
            let question = question.trim().to_string();
            if question.is_empty() {
                continue;
            }
            println!();

            match self.run_turn(&question).await {
                Ok(blocks) => {
                    for block in blocks {
                        println!("{block}");
                        println!();
                    }
                }
                Err(GatewayError::Cancelled) => break,
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_shutdown();
        Ok(())
    }

    /// Language selection, entered once at startup.
    async fn select_language(&mut self) -> Result<Option<String>> {
        if let Some(preset) = self.preset_language.take() {
            return Ok(Some(preset));
        }

        let Some(use_default) = self.operator.confirm_default_language()? else {
            return Ok(None);
        };
        if use_default {
            return Ok(Some(DEFAULT_LANGUAGE.to_string()));
        }

        let spinner = Spinner::new("Fetching language catalog...");
        let catalog = self.translator.languages().await;
        spinner.stop();

        let choices: Vec<LanguageChoice> = catalog?
            .into_iter()
            .map(|(code, language)| LanguageChoice {
                code,
                name: language.name,
            })
            .collect();

        self.operator.select_language(choices)
    }

    /// One full turn: translate the question if needed, look up answers,
    /// translate them back, render. Returns the rendered answer blocks in
    /// the order the answers were received.
    async fn run_turn(&self, question: &str) -> Result<Vec<String>, GatewayError> {
        let question = self.outbound_question(question).await?;
        let answers = self.query_answers(&question).await?;

        let mut blocks = Vec::with_capacity(answers.len());
        for answer in answers {
            let text = self.inbound_answer(answer).await?;
            blocks.push(ui::answer_block(&text));
        }
        Ok(blocks)
    }

    /// The question as sent to the QA service: translated to English unless
    /// the session already runs in English. A translation without
    /// alternatives degrades to the empty string.
    async fn outbound_question(&self, question: &str) -> Result<String, GatewayError> {
        if self.language == DEFAULT_LANGUAGE {
            return Ok(question.to_string());
        }

        let spinner = Spinner::new("Translating question...");
        let translated = self
            .translator
            .translate(question, &self.language, DEFAULT_LANGUAGE)
            .await;
        spinner.stop();

        Ok(translated?.unwrap_or_default())
    }

    async fn inbound_answer(&self, answer: Answer) -> Result<String, GatewayError> {
        if self.language == DEFAULT_LANGUAGE {
            return Ok(answer.answer);
        }

        let translated = self
            .translator
            .translate(&answer.answer, DEFAULT_LANGUAGE, &self.language)
            .await?;

        Ok(translated.unwrap_or_default())
    }

    /// The answer lookup raced against the interrupt signal. A signal
    /// arriving before or during the call fails it with `Cancelled`.
    async fn query_answers(&self, question: &str) -> Result<Vec<Answer>, GatewayError> {
        let spinner = Spinner::new("Looking up answers...");
        let result = tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => Err(GatewayError::Cancelled),
            answers = self.qa.answers(question) => answers,
        };
        spinner.stop();
        result
    }
}
