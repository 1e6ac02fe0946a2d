//! Interactive front-end for the items service.
//!
//! One sequential session: a command is read, at most one request runs to
//! completion, local state is updated from the confirmed result, and the
//! table is re-rendered. Errors on single-item operations leave the store
//! untouched; batch results go through the reconciler and its notifications
//! are printed one per line.

mod command;
mod http;

use std::io::{self, BufRead, Write};

use items_core::{
    apply_create_batch, apply_delete_batch, ApiError, FormError, ItemClient, ItemForm, ItemStore,
    Notification, PendingBatch, Selection, UpdateItem,
};

use command::{Command, EditField};
use http::Transport;

struct Session {
    client: ItemClient,
    transport: Transport,
    store: ItemStore,
    selection: Selection,
    form: ItemForm,
    batch: PendingBatch,
}

impl Session {
    fn new(base_url: &str) -> Self {
        Self {
            client: ItemClient::new(base_url),
            transport: Transport::new(),
            store: ItemStore::new(),
            selection: Selection::new(),
            form: ItemForm::new(),
            batch: PendingBatch::new(),
        }
    }

    fn dispatch(&mut self, command: Command) {
        let outcome = match command {
            Command::List => self.list(),
            Command::Show(id) => self.show(id),
            Command::Add { title, description } => self.add(&title, description.as_deref()),
            Command::BatchAdd { title, description } => {
                self.batch_add(&title, description.as_deref());
                Ok(())
            }
            Command::BatchShow => {
                self.batch_show();
                Ok(())
            }
            Command::BatchSubmit => self.batch_submit(),
            Command::Edit { id, field } => self.edit(id, field),
            Command::Delete(id) => self.delete(id),
            Command::Select(id) => {
                self.select(id);
                Ok(())
            }
            Command::SelectAll => {
                self.selection.toggle_all(&self.store);
                self.render();
                Ok(())
            }
            Command::DeleteSelected => self.delete_selected(),
            Command::Help => {
                println!("{}", command::USAGE);
                Ok(())
            }
            Command::Quit => Ok(()),
        };
        if let Err(error) = outcome {
            println!("error: {error}");
        }
    }

    fn list(&mut self) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_list_items())?;
        let items = self.client.parse_list_items(response)?;
        self.store.replace_all(items);
        self.selection.retain_present(&self.store);
        self.render();
        Ok(())
    }

    fn show(&mut self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_get_item(id))?;
        let item = self.client.parse_get_item(response)?;
        println!(
            "#{} {} [{}] {}",
            item.id,
            item.title,
            if item.is_active { "active" } else { "inactive" },
            item.description.as_deref().unwrap_or("-"),
        );
        Ok(())
    }

    /// Run the form for one entry; `None` means validation blocked it and
    /// the message has already been printed.
    fn fill_form(&mut self, title: &str, description: Option<&str>) -> Option<items_core::CreateItem> {
        self.form.set_title(title);
        if let Some(description) = description {
            self.form.set_description(description);
        }
        match self.form.take() {
            Ok(item) => Some(item),
            Err(FormError::TitleRequired) => {
                println!("title is required");
                None
            }
        }
    }

    fn add(&mut self, title: &str, description: Option<&str>) -> Result<(), ApiError> {
        let Some(pending) = self.fill_form(title, description) else {
            return Ok(());
        };
        let request = self.client.build_create_item(&pending)?;
        let item = self.client.parse_create_item(self.transport.execute(request)?)?;
        println!("created #{} {}", item.id, item.title);
        self.store.append(item);
        self.render();
        Ok(())
    }

    fn batch_add(&mut self, title: &str, description: Option<&str>) {
        if let Some(pending) = self.fill_form(title, description) {
            self.batch.push(pending);
            println!("queued ({} pending)", self.batch.len());
        }
    }

    fn batch_show(&self) {
        if self.batch.is_empty() {
            println!("batch is empty");
            return;
        }
        for entry in self.batch.entries() {
            println!(
                "  {} [{}] {}",
                entry.title,
                if entry.is_active { "active" } else { "inactive" },
                entry.description.as_deref().unwrap_or("-"),
            );
        }
    }

    fn batch_submit(&mut self) -> Result<(), ApiError> {
        if self.batch.is_empty() {
            println!("batch is empty");
            return Ok(());
        }
        let request = self.client.build_create_batch(self.batch.entries())?;
        let result = self.client.parse_create_batch(self.transport.execute(request)?)?;
        // The batch is dropped only once the server has answered; a failed
        // round trip leaves it queued for another attempt.
        let submitted = self.batch.take();
        let created = result.success.len();
        let notifications = apply_create_batch(&mut self.store, result);
        println!("created {created} of {}", submitted.len());
        dispatch_notifications(&notifications);
        self.render();
        Ok(())
    }

    fn edit(&mut self, id: i64, field: EditField) -> Result<(), ApiError> {
        let update = match field {
            EditField::Title(title) => {
                if title.trim().is_empty() {
                    // Same rule as the form: a blank title never goes out.
                    println!("title is required");
                    return Ok(());
                }
                UpdateItem {
                    title: Some(title),
                    ..UpdateItem::default()
                }
            }
            EditField::Description(description) => UpdateItem {
                description: Some(description),
                ..UpdateItem::default()
            },
            EditField::Active(is_active) => UpdateItem {
                is_active: Some(is_active),
                ..UpdateItem::default()
            },
        };
        let request = self.client.build_update_item(id, &update)?;
        let item = self.client.parse_update_item(self.transport.execute(request)?)?;
        println!("updated #{} {}", item.id, item.title);
        self.store.apply_update(item);
        self.render();
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_item(id);
        self.client.parse_delete_item(self.transport.execute(request)?)?;
        self.store.remove(id);
        self.selection.retain_present(&self.store);
        println!("deleted #{id}");
        self.render();
        Ok(())
    }

    fn select(&mut self, id: i64) {
        if !self.store.contains(id) {
            println!("no item #{id}");
            return;
        }
        let selected = self.selection.toggle(id);
        println!(
            "#{id} {}",
            if selected { "selected" } else { "unselected" }
        );
    }

    fn delete_selected(&mut self) -> Result<(), ApiError> {
        if self.selection.is_empty() {
            println!("nothing selected");
            return Ok(());
        }
        let targets = self.selection.ids();
        let request = self.client.build_delete_batch(&targets)?;
        let result = self.client.parse_delete_batch(self.transport.execute(request)?)?;
        let deleted = result.success.len();
        let notifications = apply_delete_batch(&mut self.store, &mut self.selection, result);
        println!("deleted {deleted} of {}", targets.len());
        dispatch_notifications(&notifications);
        self.render();
        Ok(())
    }

    fn render(&self) {
        if self.store.is_empty() {
            println!("(no items)");
            return;
        }
        println!("{:<2} {:>4}  {:<24} {:<8} {}", "", "id", "title", "status", "description");
        for item in self.store.iter() {
            println!(
                "{:<2} {:>4}  {:<24} {:<8} {}",
                if self.selection.contains(item.id) { "*" } else { "" },
                item.id,
                item.title,
                if item.is_active { "active" } else { "inactive" },
                item.description.as_deref().unwrap_or("-"),
            );
        }
    }
}

/// Print each reconciliation notification; nothing else consumes them here.
fn dispatch_notifications(notifications: &[Notification]) {
    for notification in notifications {
        println!("warning: {notification}");
    }
}

fn main() -> io::Result<()> {
    let base_url =
        std::env::var("ITEMS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let mut session = Session::new(&base_url);
    println!("items cli, talking to {base_url} (type `help`)");
    session.dispatch(Command::List);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => session.dispatch(command),
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}
