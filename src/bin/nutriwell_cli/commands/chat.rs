// ABOUTME: Chat command for nutriwell-cli
// ABOUTME: Runs a chat session against the chosen surface, from arguments or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwell::assistant::{ChatSession, ChatSurface, NutritionSnapshot, ResponseContext};
use nutriwell::errors::{AppError, AppResult};
use nutriwell::intelligence::{derive_metrics, NutritionConfig};
use nutriwell::models::{ChatTurn, NutritionTotals, UserProfile};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

type Result<T> = AppResult<T>;

/// How the conversation is presented
pub struct ChatOptions {
    pub surface: ChatSurface,
    pub simulate_typing: bool,
}

/// Run a chat session
///
/// With `messages`, each one is sent in order. Without, lines are read from
/// stdin until EOF or `exit`.
pub async fn run(
    profile: &UserProfile,
    totals: &NutritionTotals,
    config: &NutritionConfig,
    options: &ChatOptions,
    messages: &[String],
) -> Result<()> {
    let metrics = derive_metrics(profile, totals, config)?;
    let snapshot = NutritionSnapshot::new(totals, &metrics, &config.targets);
    let ctx = ResponseContext::new(&snapshot, profile);
    let mut session = ChatSession::new(options.surface, &profile.name);

    if let Some(greeting) = session.turns().first() {
        print_turn(greeting);
    }
    let quick = session.quick_questions();
    if !quick.is_empty() {
        println!("Quick questions:");
        for question in quick {
            println!("  - {question}");
        }
        println!();
    }

    if messages.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = lines
                .next_line()
                .await
                .map_err(|e| AppError::internal("Failed to read stdin").with_source(e))?;
            let Some(line) = line else { break };
            let line = line.trim();
            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                break;
            }
            if line.is_empty() {
                continue;
            }
            exchange(&mut session, line, &ctx, options).await?;
        }
    } else {
        for message in messages {
            exchange(&mut session, message, &ctx, options).await?;
        }
    }

    debug!(turns = session.turns().len(), "Chat session finished");
    Ok(())
}

async fn exchange(
    session: &mut ChatSession,
    utterance: &str,
    ctx: &ResponseContext<'_>,
    options: &ChatOptions,
) -> Result<()> {
    println!("> {utterance}");
    if options.simulate_typing {
        let delay = options.surface.typing_delay().sample(&mut rand::thread_rng());
        println!("(typing...)");
        tokio::time::sleep(delay).await;
    }
    let reply = session.send(utterance, ctx)?;
    print_turn(reply);
    Ok(())
}

fn print_turn(turn: &ChatTurn) {
    println!("{}", turn.text);
    if !turn.suggestions.is_empty() {
        println!();
        println!("Suggestions: {}", turn.suggestions.join(" | "));
    }
    println!();
}
