//! `hrent` - terminal client for the HRENT property-rental service

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod command;
mod otp;
mod settings;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use hrent_client::{
    ApiClient, Conversation, Message, OutgoingMessage, Party, Property, Registration, Rental,
    RentalUser,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::{Command, USAGE};
use otp::{ResendTimer, countdown_label};
use settings::{API_URL_ENV, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrent=info,hrent_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let command = Command::parse(std::env::args().skip(1))?;
    if command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let settings = load_settings().await?;
    let config = settings.client_config(std::env::var(API_URL_ENV).ok())?;
    info!("Using API at {}", config.base_url);

    let session = Arc::new(settings.open_session());
    let client = ApiClient::new(config, session)?;
    run(&client, command).await
}

async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Help => println!("{USAGE}"),
        Command::Login { email } => {
            let sent = client.send_login_otp(&email).await?;
            println!("{}", sent.message);
            let mut timer = ResendTimer::start();
            let code = loop {
                if let Some(code) = read_code(&mut timer)? {
                    break code;
                }
                let sent = client.send_login_otp(&email).await?;
                println!("{}", sent.message);
            };
            let auth = client.verify_login_otp(&email, &code).await?;
            println!("Signed in as {}", auth.user.full_name());
        }
        Command::Register {
            first_name,
            last_name,
            email,
            user_type,
        } => {
            let registration = Registration {
                first_name,
                last_name,
                email,
                user_type,
            };
            let sent = client.send_registration_otp(&registration).await?;
            println!("{}", sent.message);
            let mut timer = ResendTimer::start();
            let code = loop {
                if let Some(code) = read_code(&mut timer)? {
                    break code;
                }
                let sent = client.send_registration_otp(&registration).await?;
                println!("{}", sent.message);
            };
            let auth = client
                .verify_registration_otp(&registration.email, &code)
                .await?;
            println!(
                "Welcome, {} ({})",
                auth.user.full_name(),
                auth.user.user_type.display_name()
            );
        }
        Command::Logout => {
            client.logout()?;
            println!("Signed out");
        }
        Command::Whoami => {
            let user = client.profile().await?.user;
            println!("{} <{}>", user.full_name(), user.email);
            println!("  id:       {}", user.id);
            println!("  account:  {}", user.user_type.display_name());
            println!("  verified: {}", if user.is_verified { "yes" } else { "no" });
        }
        Command::Profile(update) => {
            let user = client.update_profile(&update).await?.user;
            println!("Saved {} <{}>", user.full_name(), user.email);
        }
        Command::Properties(order) => {
            let properties = client.properties(order).await?.properties;
            println!("{} ({})", order.display_name(), properties.len());
            properties.iter().for_each(print_property);
        }
        Command::Mine => {
            let properties = client.my_properties().await?.properties;
            for property in &properties {
                print_property(property);
                let actions: Vec<_> = property
                    .status
                    .owner_actions()
                    .iter()
                    .map(|status| status.display_name())
                    .collect();
                println!("    can set: {}", actions.join(", "));
            }
        }
        Command::NewProperty(property) => {
            let created = client.create_property(&property).await?.property;
            print_property(&created);
        }
        Command::EditProperty { id, update } => {
            let property = client.update_property(&id, &update).await?.property;
            print_property(&property);
        }
        Command::SetProperty { id, status } => {
            let property = client.update_property_status(&id, status).await?.property;
            println!(
                "{} is now {}",
                property.title,
                property.status.display_name()
            );
        }
        Command::DeleteProperty(id) => {
            let deleted = client.delete_property(&id).await?;
            println!("{}", deleted.message);
        }
        Command::Upload(path) => {
            println!("{}", upload_file(client, &path).await?);
        }
        Command::Rent(property_id) => {
            let rental = client.create_rental(&property_id).await?.rental;
            println!("Requested {} ({})", rental.property.title, rental.status);
        }
        Command::Rentals => {
            let rentals = client.my_rental_requests().await?.rentals;
            for rental in &rentals {
                print_rental(rental, Party::Tenant);
            }
        }
        Command::Incoming => {
            let rentals = client.incoming_rental_requests().await?.rentals;
            for rental in &rentals {
                print_rental(rental, Party::Owner);
            }
        }
        Command::SetRental { id, status } => {
            let rental = client.update_rental_status(&id, status).await?.rental;
            println!("{} is now {}", rental.property.title, rental.status);
        }
        Command::Chats => {
            let user_id = client.current_user_id().unwrap_or_default();
            for conversation in client.conversations().await?.conversations {
                print_conversation(&conversation, &user_id);
            }
        }
        Command::Chat(rental_id) => {
            let user_id = client.current_user_id().unwrap_or_default();
            let conversation = client
                .get_or_create_conversation(&rental_id)
                .await?
                .conversation;
            print_conversation(&conversation, &user_id);
            for message in client.messages(&conversation.id).await?.messages {
                print_message(&message, &user_id);
            }
        }
        Command::Send {
            conversation_id,
            text,
        } => {
            let outgoing = OutgoingMessage::text(text);
            let sent = client.send_message(&conversation_id, &outgoing).await?;
            println!("Sent {}", sent.message.id);
        }
        Command::SendImage {
            conversation_id,
            path,
        } => {
            let outgoing = OutgoingMessage::image(upload_file(client, &path).await?);
            let sent = client.send_message(&conversation_id, &outgoing).await?;
            println!("Sent {}", sent.message.id);
        }
        Command::Edit {
            conversation_id,
            message_id,
            text,
        } => {
            let user_id = client.current_user_id().unwrap_or_default();
            let messages = client.messages(&conversation_id).await?.messages;
            let Some(message) = messages.iter().find(|m| m.id == message_id) else {
                bail!("no message {message_id} in conversation {conversation_id}");
            };
            if !message.is_from(&user_id) {
                bail!("only your own messages can be edited");
            }
            if !message.can_be_edited() {
                bail!("message {message_id} can no longer be edited");
            }
            let edited = client.edit_message(&message_id, &text).await?.message;
            print_message(&edited, &user_id);
        }
        Command::React { message_id, emoji } => {
            let user_id = client.current_user_id().unwrap_or_default();
            let reacted = client.react_to_message(&message_id, &emoji).await?.message;
            print_message(&reacted, &user_id);
        }
    }
    Ok(())
}

/// Reads a one-time code. `None` means a new code should be sent.
///
/// Blank lines during the resend cooldown just report the time left.
fn read_code(timer: &mut ResendTimer) -> anyhow::Result<Option<String>> {
    loop {
        print!("Code (blank line to resend): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("no code entered");
        }
        let code = line.trim();
        if !code.is_empty() {
            return Ok(Some(code.to_string()));
        }
        let remaining = timer.remaining();
        if remaining.is_zero() {
            timer.restart();
            return Ok(None);
        }
        println!("You can resend in {}", countdown_label(remaining));
    }
}

async fn upload_file(client: &ApiClient, path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(client.upload_image(&bytes).await?.image_url)
}

fn print_property(property: &Property) {
    println!(
        "{}  {:<32} {:>20}  [{}]",
        property.id,
        property.title,
        property.price_label(),
        property.status.display_name()
    );
    println!("    {}", property.address);
}

fn print_rental(rental: &Rental, party: Party) {
    let counterpart = match party {
        Party::Tenant => &rental.owner,
        Party::Owner => &rental.tenant,
    };
    println!(
        "{}  {:<32} {:<24} {}",
        rental.id,
        rental.property.title,
        counterpart.display_name(),
        rental.status
    );

    let actions = rental.status.actions_for(party);
    if !actions.is_empty() {
        let names: Vec<&str> = actions.iter().map(|s| s.as_str()).collect();
        println!("    next: {}", names.join(", "));
    }
    if rental.status.chat_available(party) {
        println!("    chat: hrent chat {}", rental.id);
    }
}

fn print_conversation(conversation: &Conversation, user_id: &str) {
    let with = conversation
        .counterpart(user_id)
        .map_or_else(|| "-".to_string(), RentalUser::display_name);
    println!(
        "{}  {:<32} with {}",
        conversation.id, conversation.rental.property.title, with
    );
}

fn print_message(message: &Message, user_id: &str) {
    let who = if message.is_from(user_id) {
        "you".to_string()
    } else {
        message.sender.display_name()
    };
    let time = message.created_at.with_timezone(&chrono::Local).format("%d %b %H:%M");
    let body = match (&message.text, &message.image_url) {
        (Some(text), _) => text.clone(),
        (None, Some(url)) => format!("[image] {url}"),
        (None, None) => String::new(),
    };
    let edited = if message.edited() { " (edited)" } else { "" };
    let reactions: String = message.reactions.iter().map(|r| r.emoji.as_str()).collect();

    let line = format!("[{time}] {who}: {body}{edited} {reactions}");
    println!("{}", line.trim_end());
}
