//! Users command - Login account management.

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::domain::LoginDto;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    match args.action {
        UsersAction::Create { email, password } => {
            let db = Database::connect(&config).await?;
            let services = Services::from_connection(db.get_connection(), config);

            let user = services
                .auth()
                .create_account(LoginDto::new(email, password))
                .await?;

            println!("Created account {} ({})", user.email, user.id);
        }
    }

    Ok(())
}
