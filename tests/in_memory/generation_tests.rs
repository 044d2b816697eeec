//! In-memory integration tests for topic-driven task suggestions.

use super::helpers::{Harness, harness, harness_with, owner};
use rstest::rstest;
use taskwise::generation::{
    adapters::{ScriptedReply, ScriptedTextGenerator},
    domain::{GenerationOutcome, fallback_suggestions},
    ports::TextGeneratorError,
};
use taskwise::task::domain::OwnerId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_generator_yields_the_fallback_list(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let suggestions = harness.service.generate(owner, "Rust").await?;

    eyre::ensure!(
        suggestions.outcome() == GenerationOutcome::Fallback,
        "expected fallback outcome"
    );
    eyre::ensure!(
        suggestions.titles() == fallback_suggestions("Rust").as_slice(),
        "unexpected fallback list {:?}",
        suggestions.titles()
    );
    eyre::ensure!(harness.generator.prompts()?.len() == 1, "expected one call");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn model_reply_is_parsed_into_at_most_five_titles(
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let harness = harness_with(ScriptedTextGenerator::replying(
        "Here are some tasks:\n\
         1. Install the toolchain\n\
         - Read the ownership chapter\n\
         * Write a CLI\n\
         \n\
         Port a small script\n\
         Profile the hot loop\n\
         Publish a crate\n\
         Review a pull request\n",
    ));

    let suggestions = harness.service.generate(owner, "  Rust ").await?;

    eyre::ensure!(
        suggestions.outcome() == GenerationOutcome::AiSuccess,
        "expected model output to be used"
    );
    eyre::ensure!(suggestions.topic() == "Rust", "topic should be trimmed");
    eyre::ensure!(
        suggestions.titles().len() <= 5 && !suggestions.titles().is_empty(),
        "unexpected count {:?}",
        suggestions.titles()
    );
    eyre::ensure!(
        suggestions
            .titles()
            .iter()
            .all(|title| !title.starts_with(|c: char| c.is_ascii_digit())),
        "numbered lines must be dropped"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quota_errors_fall_back_and_recovery_uses_the_model(
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let generator = ScriptedTextGenerator::new(ScriptedReply::Failure(TextGeneratorError::Quota(
        "daily limit".to_owned(),
    )));
    let harness = harness_with(generator);

    let degraded = harness.service.generate(owner, "Go").await?;
    harness
        .generator
        .set_reply(ScriptedReply::Text("Write a goroutine demo".to_owned()))?;
    let recovered = harness.service.generate(owner, "Go").await?;

    eyre::ensure!(degraded.is_fallback(), "quota failure should fall back");
    eyre::ensure!(!recovered.is_fallback(), "recovered generator should be used");
    eyre::ensure!(
        recovered.titles() == ["Write a goroutine demo".to_owned()],
        "unexpected titles {:?}",
        recovered.titles()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_serialize_as_tasks_and_topic(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let suggestions = harness.service.generate(owner, "Rust").await?;
    let json = serde_json::to_value(&suggestions)?;

    eyre::ensure!(
        json.get("topic").and_then(serde_json::Value::as_str) == Some("Rust"),
        "missing topic in {json}"
    );
    eyre::ensure!(
        json.get("tasks")
            .and_then(serde_json::Value::as_array)
            .map(Vec::len)
            == Some(5),
        "expected five tasks in {json}"
    );
    Ok(())
}
