//! Interactive game.

use std::sync::Arc;

use anyhow::Result;
use qweek_application::{PlaySession, Registration, RegistrationService, parse_play_query};
use qweek_core::game::GameController;
use qweek_core::matching::{Answers, ConnectBoard};
use qweek_core::question::{QuestionBank, Round1Item, Round2Item};
use tokio::sync::Mutex;

use super::input::{Round1Command, Round2Command, parse_round1, parse_round2};
use crate::bootstrap::AppContext;
use crate::ui::board_view::{BoardView, answer_label, layout_anchors, resting_pointer};
use crate::ui::{Input, Terminal, screens};

pub async fn run(
    context: &AppContext,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let mut terminal = Terminal::new()?;
    let registrations = RegistrationService::new(Arc::clone(&context.repository));

    let Some(registration) = register(&mut terminal, &registrations, first_name, last_name).await?
    else {
        return Ok(());
    };

    // The play screen only trusts what it receives through the hand-off.
    let player = match parse_play_query(&registration.query) {
        Ok(player) => player,
        Err(e) => {
            screens::notice(&screens::error_message(&e));
            return Ok(());
        }
    };

    screens::intro(&player);
    if !terminal.pause("¡Comenzar a Jugar!")? {
        return Ok(());
    }

    let mut session = PlaySession::start(player, QuestionBank::default(), Arc::clone(&context.repository));
    let controller = session.controller();

    let Some(answers) = play_round1(&mut terminal, &controller).await? else {
        tracing::info!("Game abandoned during round 1");
        return Ok(());
    };
    session.submit_round1(answers).await?;
    if let Some(review) = session.round1_review().await {
        screens::review(&review);
    }
    if !terminal.pause("Siguiente Ronda")? {
        return Ok(());
    }

    session.next().await?;
    let Some(answers) = play_round2(&mut terminal, &controller).await? else {
        tracing::info!("Game abandoned during round 2");
        return Ok(());
    };
    session.submit_round2(answers).await?;
    if let Some(review) = session.round2_review().await {
        screens::review(&review);
    }
    if !terminal.pause("Ver Resultado Final")? {
        return Ok(());
    }

    let outcome = session.finish().await?;
    screens::final_summary(&outcome);
    Ok(())
}

/// Entry form. Returns `None` when the player quits or has already played.
async fn register(
    terminal: &mut Terminal,
    registrations: &RegistrationService,
    mut first_name: Option<String>,
    mut last_name: Option<String>,
) -> Result<Option<Registration>> {
    screens::entry();

    loop {
        let first = match first_name.take() {
            Some(name) => name,
            None => match terminal.read("Nombre: ")? {
                Input::Line(name) => name,
                Input::Quit => return Ok(None),
            },
        };
        let last = match last_name.take() {
            Some(name) => name,
            None => match terminal.read("Apellido: ")? {
                Input::Line(name) => name,
                Input::Quit => return Ok(None),
            },
        };

        match registrations.check_and_register(&first, &last).await {
            Ok(registration) => return Ok(Some(registration)),
            Err(e) if e.is_validation() => screens::notice(&screens::error_message(&e)),
            Err(e) if e.is_duplicate() => {
                screens::notice(&screens::error_message(&e));
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

async fn play_round1(
    terminal: &mut Terminal,
    controller: &Mutex<GameController>,
) -> Result<Option<Answers>> {
    let (mut board, prompts): (_, Vec<Round1Item>) = {
        let controller = controller.lock().await;
        (controller.select_board(), controller.round1_prompts().to_vec())
    };
    let mut message: Option<String> = None;

    loop {
        let elapsed = controller.lock().await.elapsed_seconds();
        screens::round1(&board, &prompts, elapsed);
        if let Some(text) = message.take() {
            screens::notice(&text);
        }

        let line = match terminal.read("> ")? {
            Input::Line(line) => line,
            Input::Quit => return Ok(None),
        };

        match parse_round1(&line) {
            Some(Round1Command::Submit) => return Ok(Some(board.submit())),
            Some(Round1Command::Choose { prompt, value }) => match prompts.get(prompt) {
                Some(item) => {
                    if let Err(e) = board.choose(item.id, &value) {
                        message = Some(screens::error_message(&e));
                    }
                }
                None => message = Some(format!("No existe el motivo {}.", prompt + 1)),
            },
            Some(Round1Command::Clear(prompt)) => match prompts.get(prompt) {
                Some(item) => board.clear(item.id),
                None => message = Some(format!("No existe el motivo {}.", prompt + 1)),
            },
            None => message = Some("Comando no reconocido.".to_string()),
        }
    }
}

async fn play_round2(
    terminal: &mut Terminal,
    controller: &Mutex<GameController>,
) -> Result<Option<Answers>> {
    let (mut board, prompts, choices) = {
        let controller = controller.lock().await;
        (
            controller.connect_board(),
            controller.round2_prompts().to_vec(),
            controller.round2_choices().to_vec(),
        )
    };
    let plans: Vec<(char, &str)> = choices
        .iter()
        .enumerate()
        .map(|(i, c)| (answer_label(i), c.action_plan))
        .collect();
    let mut message: Option<String> = None;

    loop {
        board.recompute_anchors(layout_anchors(&board));
        if let Some(pointer) = resting_pointer(&board) {
            board.pointer_move(pointer);
        }
        let lines = BoardView::new(&board, &prompts, &choices).render();
        let elapsed = controller.lock().await.elapsed_seconds();
        screens::round2(&lines, &plans, board.connections().len(), prompts.len(), elapsed);
        if let Some(text) = message.take() {
            screens::notice(&text);
        }

        let line = match terminal.read("> ")? {
            Input::Line(line) => line,
            Input::Quit => return Ok(None),
        };

        let Some(command) = parse_round2(&line) else {
            message = Some("Comando no reconocido.".to_string());
            continue;
        };

        let result = match command {
            Round2Command::Submit => match board.submit() {
                Ok(answers) => return Ok(Some(answers)),
                Err(_) => Err("Conecta todos los motivos antes de enviar.".to_string()),
            },
            Round2Command::Cancel => {
                board.cancel_selection();
                Ok(())
            }
            Round2Command::SelectPrompt(prompt) => select(&mut board, &prompts, prompt),
            Round2Command::ClickAnswer(answer) => click(&mut board, &choices, answer),
            Round2Command::Connect { prompt, answer } => {
                if board.selected_prompt() == prompts.get(prompt).map(|p| p.id) {
                    board.cancel_selection();
                }
                select(&mut board, &prompts, prompt).and_then(|_| click(&mut board, &choices, answer))
            }
        };

        if let Err(text) = result {
            message = Some(text);
        }
    }
}

fn select(board: &mut ConnectBoard, prompts: &[Round2Item], index: usize) -> Result<(), String> {
    let item = prompts
        .get(index)
        .ok_or_else(|| format!("No existe el motivo {}.", index + 1))?;
    board
        .select_prompt(item.id)
        .map_err(|e| screens::error_message(&e))
}

fn click(board: &mut ConnectBoard, choices: &[Round2Item], index: usize) -> Result<(), String> {
    let item = choices
        .get(index)
        .ok_or_else(|| format!("No existe el plan {}.", answer_label(index)))?;
    match board.click_answer(item.id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Primero selecciona un motivo.".to_string()),
        Err(e) => Err(screens::error_message(&e)),
    }
}
