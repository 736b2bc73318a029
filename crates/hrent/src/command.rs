//! Command-line parsing.

use std::path::PathBuf;

use anyhow::{Context, bail};
use hrent_client::{
    NewProperty, PricingFrequency, ProfileUpdate, PropertyStatus, PropertyUpdate, RentalStatus,
    SortOrder, UserType,
};

/// Usage text printed by `help` and on bad input.
pub const USAGE: &str = "\
Usage: hrent <command> [args]

Account:
  login <email>                        Sign in with a one-time code
  register <first> <last> <email> [user|owner]
                                       Create an account
  logout                               Forget the stored session
  whoami                               Show the signed-in profile
  profile [--first <name>] [--last <name>]
                                       Change your name

Properties:
  properties [latest|price-asc|price-desc]
                                       Browse listings
  mine                                 List your own listings
  new-property --title <t> --address <a> --price <n> [options]
                                       List a property
  edit-property <property-id> [options]
                                       Change a listing
  set-property <property-id> <active|hidden|deleted>
                                       Change a listing's visibility
  delete-property <property-id>        Remove a listing
  upload <file>                        Upload a JPEG and print its URL

  Property options:
    --title <text>  --description <text>  --address <text>  --price <n>
    --frequency <monthly|weekly|quarterly|yearly>  --bargain <yes|no>
    --image <url>   (repeatable)

Rentals:
  rent <property-id>                   Request to rent a property
  rentals                              Your rental requests
  incoming                             Requests for your properties
  set-rental <rental-id> <status>      Change a rental's status

Chat:
  chats                                List conversations
  chat <rental-id>                     Open a rental's conversation
  send <conversation-id> <text...>     Send a message
  send-image <conversation-id> <file>  Upload a JPEG and send it
  edit <conversation-id> <message-id> <text...>
                                       Edit one of your recent messages
  react <message-id> <emoji>           React to a message

While waiting for a one-time code, enter a blank line to have it resent.";

const PROPERTY_FLAGS: &[&str] = &[
    "title",
    "description",
    "address",
    "price",
    "frequency",
    "bargain",
    "image",
];

const PROFILE_FLAGS: &[&str] = &["first", "last"];

const RENTAL_STATUSES: &str =
    "expected pending, accepted, denied, cancelled or cancellationRequested";

/// A parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage.
    Help,
    /// OTP login.
    Login {
        /// Account email.
        email: String,
    },
    /// OTP registration.
    Register {
        /// First name.
        first_name: String,
        /// Last name.
        last_name: String,
        /// Account email.
        email: String,
        /// Account kind.
        user_type: UserType,
    },
    /// Clear the session.
    Logout,
    /// Show the profile.
    Whoami,
    /// Change the profile name.
    Profile(ProfileUpdate),
    /// Browse all listings.
    Properties(SortOrder),
    /// The user's own listings.
    Mine,
    /// List a new property.
    NewProperty(NewProperty),
    /// Change fields of a listing.
    EditProperty {
        /// Property id.
        id: String,
        /// Fields to change.
        update: PropertyUpdate,
    },
    /// Change a listing's visibility.
    SetProperty {
        /// Property id.
        id: String,
        /// New status.
        status: PropertyStatus,
    },
    /// Delete a listing.
    DeleteProperty(String),
    /// Request a rental.
    Rent(String),
    /// Outgoing rental requests.
    Rentals,
    /// Incoming rental requests.
    Incoming,
    /// Change a rental's status.
    SetRental {
        /// Rental id.
        id: String,
        /// New status.
        status: RentalStatus,
    },
    /// List conversations.
    Chats,
    /// Open the conversation for a rental.
    Chat(String),
    /// Send a text message.
    Send {
        /// Conversation id.
        conversation_id: String,
        /// Message text.
        text: String,
    },
    /// Upload an image and send it as a message.
    SendImage {
        /// Conversation id.
        conversation_id: String,
        /// JPEG file.
        path: PathBuf,
    },
    /// Edit a sent text message.
    Edit {
        /// Conversation holding the message.
        conversation_id: String,
        /// Message id.
        message_id: String,
        /// Replacement text.
        text: String,
    },
    /// React to a message.
    React {
        /// Message id.
        message_id: String,
        /// Reaction emoji.
        emoji: String,
    },
    /// Upload an image file.
    Upload(PathBuf),
}

impl Command {
    /// Parses the arguments following the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Self::Help);
        };
        let rest: Vec<String> = args.collect();

        let command = match (name.as_str(), rest.as_slice()) {
            ("help" | "-h" | "--help", _) => Self::Help,
            ("login", [email]) => Self::Login {
                email: email.clone(),
            },
            ("register", [first, last, email]) => Self::Register {
                first_name: first.clone(),
                last_name: last.clone(),
                email: email.clone(),
                user_type: UserType::User,
            },
            ("register", [first, last, email, kind]) => Self::Register {
                first_name: first.clone(),
                last_name: last.clone(),
                email: email.clone(),
                user_type: kind.parse().map_err(anyhow::Error::msg)?,
            },
            ("logout", []) => Self::Logout,
            ("whoami", []) => Self::Whoami,
            ("profile", flags) => Self::Profile(parse_profile_update(flags)?),
            ("properties", []) => Self::Properties(SortOrder::Latest),
            ("properties", [order]) => Self::Properties(parse_sort(order)?),
            ("mine", []) => Self::Mine,
            ("new-property", flags) => Self::NewProperty(parse_new_property(flags)?),
            ("edit-property", [id, flags @ ..]) => Self::EditProperty {
                id: id.clone(),
                update: parse_property_update(flags)?,
            },
            ("set-property", [id, status]) => Self::SetProperty {
                id: id.clone(),
                status: status
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context("expected active, hidden or deleted")?,
            },
            ("delete-property", [id]) => Self::DeleteProperty(id.clone()),
            ("rent", [id]) => Self::Rent(id.clone()),
            ("rentals", []) => Self::Rentals,
            ("incoming", []) => Self::Incoming,
            ("set-rental", [id, status]) => Self::SetRental {
                id: id.clone(),
                status: status
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context(RENTAL_STATUSES)?,
            },
            ("chats", []) => Self::Chats,
            ("chat", [rental_id]) => Self::Chat(rental_id.clone()),
            ("send", [conversation_id, words @ ..]) if !words.is_empty() => Self::Send {
                conversation_id: conversation_id.clone(),
                text: words.join(" "),
            },
            ("send-image", [conversation_id, path]) => Self::SendImage {
                conversation_id: conversation_id.clone(),
                path: PathBuf::from(path),
            },
            ("edit", [conversation_id, message_id, words @ ..]) if !words.is_empty() => {
                Self::Edit {
                    conversation_id: conversation_id.clone(),
                    message_id: message_id.clone(),
                    text: words.join(" "),
                }
            }
            ("react", [message_id, emoji]) => Self::React {
                message_id: message_id.clone(),
                emoji: emoji.clone(),
            },
            ("upload", [path]) => Self::Upload(PathBuf::from(path)),
            _ => bail!("unrecognized command: {}\n\n{USAGE}", join_args(&name, &rest)),
        };
        Ok(command)
    }
}

/// `--name value` pairs in command-line order.
struct Flags<'a>(Vec<(&'a str, &'a str)>);

impl<'a> Flags<'a> {
    fn parse(args: &'a [String], known: &[&str]) -> anyhow::Result<Self> {
        let mut pairs = Vec::new();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let Some(name) = arg.strip_prefix("--").filter(|name| known.contains(name)) else {
                bail!("unexpected argument: {arg}");
            };
            let Some(value) = args.next() else {
                bail!("missing value for --{name}");
            };
            pairs.push((name, value.as_str()));
        }
        Ok(Self(pairs))
    }

    /// The last value given for `name`.
    fn get(&self, name: &str) -> Option<&'a str> {
        self.0
            .iter()
            .rev()
            .find(|(flag, _)| *flag == name)
            .map(|(_, value)| *value)
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    fn required(&self, name: &str) -> anyhow::Result<&'a str> {
        self.get(name).with_context(|| format!("--{name} is required"))
    }

    /// Every value given for `name`.
    fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(flag, _)| *flag == name)
            .map(|(_, value)| (*value).to_owned())
            .collect()
    }
}

fn parse_new_property(args: &[String]) -> anyhow::Result<NewProperty> {
    let flags = Flags::parse(args, PROPERTY_FLAGS)?;
    Ok(NewProperty {
        title: flags.required("title")?.to_owned(),
        description: flags.get("description").unwrap_or_default().to_owned(),
        address: flags.required("address")?.to_owned(),
        images: flags.all("image"),
        price: parse_price(flags.required("price")?)?,
        pricing_frequency: flags
            .get("frequency")
            .map(parse_frequency)
            .transpose()?
            .unwrap_or_default(),
        allow_bargaining: flags
            .get("bargain")
            .map(parse_yes_no)
            .transpose()?
            .unwrap_or(false),
    })
}

fn parse_property_update(args: &[String]) -> anyhow::Result<PropertyUpdate> {
    let flags = Flags::parse(args, PROPERTY_FLAGS)?;
    let images = flags.all("image");
    let update = PropertyUpdate {
        title: flags.owned("title"),
        description: flags.owned("description"),
        address: flags.owned("address"),
        images: (!images.is_empty()).then_some(images),
        price: flags.get("price").map(parse_price).transpose()?,
        pricing_frequency: flags.get("frequency").map(parse_frequency).transpose()?,
        allow_bargaining: flags.get("bargain").map(parse_yes_no).transpose()?,
        status: None,
    };
    if update.is_empty() {
        bail!("nothing to change; pass at least one property option");
    }
    Ok(update)
}

fn parse_profile_update(args: &[String]) -> anyhow::Result<ProfileUpdate> {
    let flags = Flags::parse(args, PROFILE_FLAGS)?;
    let update = ProfileUpdate {
        first_name: flags.owned("first"),
        last_name: flags.owned("last"),
    };
    if update.is_empty() {
        bail!("nothing to change; pass --first or --last");
    }
    Ok(update)
}

fn parse_price(value: &str) -> anyhow::Result<f64> {
    let price: f64 = value
        .parse()
        .with_context(|| format!("invalid price: {value}"))?;
    if !price.is_finite() || price <= 0.0 {
        bail!("price must be greater than zero: {value}");
    }
    Ok(price)
}

fn parse_frequency(value: &str) -> anyhow::Result<PricingFrequency> {
    value.parse().map_err(anyhow::Error::msg)
}

fn parse_yes_no(value: &str) -> anyhow::Result<bool> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => bail!("expected yes or no, got {other}"),
    }
}

fn parse_sort(order: &str) -> anyhow::Result<SortOrder> {
    match order {
        "latest" => Ok(SortOrder::Latest),
        "price-asc" => Ok(SortOrder::PriceAsc),
        "price-desc" => Ok(SortOrder::PriceDesc),
        other => bail!("unknown sort order: {other} (expected latest, price-asc or price-desc)"),
    }
}

fn join_args(name: &str, rest: &[String]) -> String {
    std::iter::once(name)
        .chain(rest.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(line: &str) -> anyhow::Result<Command> {
        Command::parse(line.split_whitespace().map(String::from))
    }

    #[test]
    fn test_no_arguments_is_help() {
        assert_eq!(parse("").unwrap(), Command::Help);
        assert_eq!(parse("--help").unwrap(), Command::Help);
    }

    #[test]
    fn test_register_defaults_to_user() {
        let command = parse("register Ada Lovelace ada@example.com").unwrap();
        let Command::Register {
            user_type, email, ..
        } = command
        else {
            panic!("expected register");
        };
        assert_eq!(user_type, UserType::User);
        assert_eq!(email, "ada@example.com");

        let command = parse("register Ada Lovelace ada@example.com owner").unwrap();
        let Command::Register { user_type, .. } = command else {
            panic!("expected register");
        };
        assert_eq!(user_type, UserType::Owner);

        let landlord = parse("register Ada Lovelace ada@example.com landlord");
        assert!(landlord.is_err());
    }

    #[test]
    fn test_sort_orders() {
        assert_eq!(
            parse("properties").unwrap(),
            Command::Properties(SortOrder::Latest)
        );
        assert_eq!(
            parse("properties price-desc").unwrap(),
            Command::Properties(SortOrder::PriceDesc)
        );
        assert!(parse("properties cheapest").is_err());
    }

    #[test]
    fn test_set_rental_status() {
        assert_eq!(
            parse("set-rental r1 cancellationRequested").unwrap(),
            Command::SetRental {
                id: "r1".into(),
                status: RentalStatus::CancellationRequested,
            }
        );
        assert!(parse("set-rental r1 finished").is_err());
    }

    #[test]
    fn test_send_joins_words() {
        assert_eq!(
            parse("send c1 see you at noon").unwrap(),
            Command::Send {
                conversation_id: "c1".into(),
                text: "see you at noon".into(),
            }
        );
        assert!(parse("send c1").is_err());
    }

    #[test]
    fn test_new_property_flags() {
        let command = parse(
            "new-property --title Loft --address 1-Main-St --price 1200 \
             --frequency weekly --image a.jpg --image b.jpg --bargain yes",
        )
        .unwrap();
        assert_eq!(
            command,
            Command::NewProperty(NewProperty {
                title: "Loft".into(),
                description: String::new(),
                address: "1-Main-St".into(),
                images: vec!["a.jpg".into(), "b.jpg".into()],
                price: 1200.0,
                pricing_frequency: PricingFrequency::Weekly,
                allow_bargaining: true,
            })
        );
    }

    #[test]
    fn test_new_property_defaults_and_requirements() {
        let command = parse("new-property --title Loft --address Main --price 99.5").unwrap();
        let Command::NewProperty(property) = command else {
            panic!("expected new-property");
        };
        assert_eq!(property.pricing_frequency, PricingFrequency::Monthly);
        assert!(!property.allow_bargaining);
        assert!(property.images.is_empty());

        assert!(parse("new-property --title Loft --address Main").is_err());
        assert!(parse("new-property --title Loft --address Main --price 0").is_err());
        assert!(parse("new-property --title Loft --address Main --price NaN").is_err());
        assert!(parse("new-property --title Loft --price 5 --colour red").is_err());
        assert!(parse("new-property --title Loft --address Main --price").is_err());
        assert!(parse("new-property --title Loft --address M --price 5 --bargain maybe").is_err());
    }

    #[test]
    fn test_edit_property_sends_only_given_fields() {
        assert_eq!(
            parse("edit-property p1 --price 950 --frequency yearly").unwrap(),
            Command::EditProperty {
                id: "p1".into(),
                update: PropertyUpdate {
                    price: Some(950.0),
                    pricing_frequency: Some(PricingFrequency::Yearly),
                    ..PropertyUpdate::default()
                },
            }
        );
        assert!(parse("edit-property p1").is_err());
        assert!(parse("edit-property").is_err());
    }

    #[test]
    fn test_set_and_delete_property() {
        assert_eq!(
            parse("set-property p1 hidden").unwrap(),
            Command::SetProperty {
                id: "p1".into(),
                status: PropertyStatus::Hidden,
            }
        );
        assert!(parse("set-property p1 archived").is_err());
        assert_eq!(
            parse("delete-property p1").unwrap(),
            Command::DeleteProperty("p1".into())
        );
        assert!(parse("delete-property").is_err());
    }

    #[test]
    fn test_profile_update() {
        assert_eq!(
            parse("profile --last Byron").unwrap(),
            Command::Profile(ProfileUpdate {
                first_name: None,
                last_name: Some("Byron".into()),
            })
        );
        assert!(parse("profile").is_err());
        assert!(parse("profile --middle Augusta").is_err());
    }

    #[test]
    fn test_chat_message_commands() {
        assert_eq!(
            parse("edit c1 m1 see you at one").unwrap(),
            Command::Edit {
                conversation_id: "c1".into(),
                message_id: "m1".into(),
                text: "see you at one".into(),
            }
        );
        assert!(parse("edit c1 m1").is_err());
        assert_eq!(
            parse("react m1 👍").unwrap(),
            Command::React {
                message_id: "m1".into(),
                emoji: "👍".into(),
            }
        );
        assert_eq!(
            parse("send-image c1 photo.jpg").unwrap(),
            Command::SendImage {
                conversation_id: "c1".into(),
                path: PathBuf::from("photo.jpg"),
            }
        );
        assert!(parse("send-image c1").is_err());
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(parse("login").is_err());
        assert!(parse("rent").is_err());
        assert!(parse("logout now").is_err());
        assert!(parse("evict p1").is_err());
    }
}
