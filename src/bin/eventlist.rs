//! A terminal front-end for a remote todo collection.
//!
//! Every command is translated into the clicks and key strokes a user would perform on the web page,
//! so that this goes through exactly the same code paths.

use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};

use eventlist::config::Config;
use eventlist::presenter::html::to_html;
use eventlist::presenter::memory::MemoryRenderer;
use eventlist::presenter::render::{row_element_id, FormFields, RowControl};
use eventlist::utils::{print_todo_list, print_view};
use eventlist::{EventListCoordinator, TodoId};

const HELP: &str = "\
Commands:
    list                                   show the displayed list
    store                                  show the in-memory todos
    html                                   print the page markup
    add <start|-> <end|-> <title...>       create a todo
    edit <id> <start|-> <end|-> <title...> edit a todo
    delete <id>                            delete a todo
    refresh                                fetch the list again
    quit";


#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::from_env()?;
    println!("Using the collection at {} (failure policy: {:?})", config.base_url(), config.failure_policy());
    println!("You can set the RUST_LOG environment variable to display more info about what happens.");

    let mut coordinator = eventlist::build(&config, MemoryRenderer::new())?;
    if let Err(err) = coordinator.start().await {
        log::error!("Unable to fetch the initial list: {}", err);
    }
    print_view(coordinator.presenter().renderer());
    println!("{}", HELP);

    let stdin = stdin();
    loop {
        print!("> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["list"] => print_view(coordinator.presenter().renderer()),
            ["store"] => print_todo_list(coordinator.store().get_all()),
            ["html"] => print!("{}", to_html(coordinator.presenter().renderer())),
            ["refresh"] => report(coordinator.refresh().await),
            ["add", start, end, title @ ..] if title.is_empty() == false => {
                let fields = FormFields::new(title.join(" "), date_arg(start), date_arg(end));
                report(add(&mut coordinator, fields).await);
            },
            ["edit", id, start, end, title @ ..] if title.is_empty() == false => {
                let fields = FormFields::new(title.join(" "), date_arg(start), date_arg(end));
                report(edit(&mut coordinator, &TodoId::from(*id), fields).await);
            },
            ["delete", id] => {
                let element_id = row_element_id(&TodoId::from(*id));
                report(coordinator.click_row(&element_id, RowControl::Delete).await);
            },
            _ => println!("{}", HELP),
        }
    }

    Ok(())
}

/// `-` stands for "no date"
fn date_arg(arg: &str) -> &str {
    if arg == "-" { "" } else { arg }
}

fn report<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(err) = result {
        println!("The server did not accept this change: {}", err);
    }
}

async fn add(coordinator: &mut EventListCoordinator<MemoryRenderer>, fields: FormFields) -> Result<(), eventlist::error::RemoteError> {
    coordinator.click_form(eventlist::presenter::render::ADD_BUTTON_ID).await?;
    coordinator.presenter_mut().renderer_mut().type_into_input_form(fields);
    coordinator.click_form(eventlist::presenter::render::NEW_TODO_FORM_ID).await
}

async fn edit(coordinator: &mut EventListCoordinator<MemoryRenderer>, id: &TodoId, fields: FormFields) -> Result<(), eventlist::error::RemoteError> {
    let element_id = row_element_id(id);
    coordinator.click_row(&element_id, RowControl::Edit).await?;
    if coordinator.presenter_mut().renderer_mut().type_into_edit_form(&element_id, fields) == false {
        println!("There is no todo {}", id);
        return Ok(());
    }
    coordinator.click_row(&element_id, RowControl::Save).await
}
