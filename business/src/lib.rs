pub mod application {
    pub mod chat {
        pub mod send_message;
    }
}

pub mod domain {
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod send_message;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
