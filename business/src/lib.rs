pub mod application {
    pub mod connectivity {
        pub mod check;
    }
    pub mod model_catalog {
        pub mod list;
    }
    pub mod report {
        pub mod analyze;
    }
}

pub mod domain {
    pub mod logger;
    pub mod connectivity {
        pub mod use_cases {
            pub mod check;
        }
    }
    pub mod generation {
        pub mod errors;
        pub mod services;
        pub mod settings;
    }
    pub mod model_catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod list;
        }
    }
    pub mod report {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod analyze;
        }
    }
}
