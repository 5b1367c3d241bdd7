//! Full-screen views printed between inputs.

use chrono::Local;
use colored::Colorize;
use qweek_application::csv_export::format_timestamp_in;
use qweek_application::FinishOutcome;
use qweek_core::QweekError;
use qweek_core::game::{RoundReview, format_elapsed};
use qweek_core::matching::SelectBoard;
use qweek_core::participant::{Participant, PlayerName};
use qweek_core::question::Round1Item;

use super::board_view::fit;

const PROGRESS_WIDTH: usize = 30;

pub fn clear() {
    print!("\x1B[2J\x1B[H");
}

fn header(title: &str) {
    println!("{}", format!("=== {} ===", title).bright_magenta().bold());
}

fn timer(elapsed_seconds: u64) {
    println!("{}", format!("Tiempo: {}", format_elapsed(elapsed_seconds)).bright_black());
}

pub fn entry() {
    clear();
    header("QWeek");
    println!("Ingresa tu nombre y apellido para comenzar.");
    println!();
}

pub fn intro(player: &PlayerName) {
    clear();
    header(&format!("¡Hola, {}!", player.display_name()));
    println!("Prepárate para el desafío.");
    println!();
    println!("{}", "Instrucciones del Juego".bold());
    println!("  - El juego consiste en 2 rondas de asociación.");
    println!(
        "  - {} Deberás unir cada \"motivo de reclamo\" con la cantidad correcta de reclamos recibidos.",
        "Ronda 1:".bold()
    );
    println!(
        "  - {} Unirás cada \"motivo de reclamo\" con su \"plan de acción\" correspondiente.",
        "Ronda 2:".bold()
    );
    println!();
    println!(
        "{}",
        "Tu tiempo de juego será cronometrado. ¡Intenta ser rápido y preciso!".yellow()
    );
}

pub fn round1(board: &SelectBoard, prompts: &[Round1Item], elapsed_seconds: u64) {
    clear();
    header("Ronda 1: Motivo de reclamo y cantidad");
    timer(elapsed_seconds);
    println!();

    for (index, item) in prompts.iter().enumerate() {
        let chosen = match board.answer(item.id) {
            Some(value) => value.bright_green().bold().to_string(),
            None => "—".bright_black().to_string(),
        };
        println!("  {}. {} {}", index + 1, fit(item.prompt, 40), chosen);
    }

    println!();
    println!("Opciones: {}", board.options().join(", ").bright_cyan());
    println!(
        "{}",
        format!(
            "Respondidas {}/{}. Escribe '<n> <cantidad>', 'borrar <n>' o 'enviar'.",
            board.answered_count(),
            prompts.len()
        )
        .bright_black()
    );
}

pub fn round2(board_lines: &[String], plans: &[(char, &str)], connected: usize, total: usize, elapsed_seconds: u64) {
    clear();
    header("Ronda 2: Motivo de reclamo y plan de acción");
    timer(elapsed_seconds);
    println!();

    for line in board_lines {
        println!("{}", line);
    }

    println!();
    for (label, plan) in plans {
        let mut lines = plan.lines();
        if let Some(first) = lines.next() {
            println!("  {}) {}", label.to_string().bold(), first.trim());
        }
        for rest in lines {
            println!("     {}", rest.trim());
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Conectadas {}/{}. Escribe '<n>' y luego '<letra>' (o '<n><letra>'), 'cancelar' o 'enviar'.",
            connected, total
        )
        .bright_black()
    );
}

pub fn review(review: &RoundReview) {
    clear();
    header(&format!("Resultados de la Ronda {}", review.round));
    println!(
        "Tu puntaje: {} correctas.",
        format!("{} de {}", review.score, review.total).bold()
    );
    println!();

    for row in &review.rows {
        let mark = if row.is_correct {
            "✔".green().bold()
        } else {
            "✘".red().bold()
        };
        println!("{} {}", mark, row.prompt.bold());

        let answer = row.user_answer_text().replace('\n', " ");
        let answer = if row.is_correct {
            answer.green()
        } else {
            answer.red()
        };
        println!("    Tu respuesta: {}", answer);
        if !row.is_correct {
            println!(
                "    Respuesta correcta: {}",
                row.correct_answer.replace('\n', " ").green()
            );
        }
        println!();
    }
}

pub fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * PROGRESS_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(PROGRESS_WIDTH - filled))
}

pub fn final_summary(outcome: &FinishOutcome) {
    let summary = &outcome.summary;
    clear();
    header("¡Juego Completado!");
    println!("Gracias por participar en la QWeek.");
    println!();
    println!("Tu desempeño final fue:");
    println!("{}", format!("{}%", summary.percentage()).bright_green().bold());
    println!("({} de {} correctas)", summary.score, summary.total);
    println!("{}", progress_bar(summary.percentage()).cyan());
    println!();
    println!("Tiempo Final: {}", summary.formatted_time().bold());

    if let Some(notice) = outcome.save.notice() {
        println!();
        println!("{}", notice.yellow());
    }
}

/// Text to show the player for an error.
pub fn error_message(err: &QweekError) -> String {
    match err {
        QweekError::Validation(message) => message.clone(),
        QweekError::DuplicateParticipant { .. } => {
            qweek_application::registration::ALREADY_PLAYED_MESSAGE.to_string()
        }
        other => other.to_string(),
    }
}

pub fn notice(message: &str) {
    println!("{}", message.red());
}

pub fn participants_table(participants: &[Participant]) {
    if participants.is_empty() {
        println!("{}", "No hay participaciones registradas.".bright_black());
        return;
    }

    println!(
        "{}",
        format!(
            "{} {} {} {} {}",
            fit("Nombre", 18),
            fit("Apellido", 18),
            fit("Calificación", 16),
            fit("Fecha y Hora", 22),
            "ID"
        )
        .bold()
    );
    for participant in participants {
        println!(
            "{} {} {} {} {}",
            fit(&participant.first_name, 18),
            fit(&participant.last_name, 18),
            fit(&participant.score_label(), 16),
            fit(&format_timestamp_in(&participant.created_at, &Local), 22),
            participant.id.bright_black()
        );
    }
    println!();
    println!("{} participaciones", participants.len());
}
