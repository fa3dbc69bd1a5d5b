//! Domain-level command and result types
//! These structs are the inputs and outputs of the services in the domain
//! layer. The console layer builds them from what the user typed.

pub mod animals {
    use shared::AnimalDetails;

    /// Input for adding a new animal. The store assigns the id.
    #[derive(Debug, Clone)]
    pub struct AddAnimalCommand {
        pub name: String,
        pub weight: f64,
        pub details: AnimalDetails,
    }

    /// Command for deleting one animal by id.
    #[derive(Debug, Clone)]
    pub struct DeleteAnimalCommand {
        pub animal_id: u32,
    }

    /// Result of deleting an animal.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DeleteAnimalResult {
        pub deleted: bool,
    }
}

pub mod users {
    /// Credentials typed at the login prompt.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub login: String,
        pub password: String,
    }

    /// Credentials for a new account.
    #[derive(Debug, Clone)]
    pub struct RegisterUserCommand {
        pub login: String,
        pub password: String,
    }

    /// Result of a registration attempt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RegisterUserResult {
        Registered,
        LoginTaken,
    }
}
