pub mod shared {
    pub mod core {
        pub mod auth;
        pub mod cancellation;
        pub mod primitives;
    }
}

pub mod modules {
    pub mod manuscripts {
        pub mod core {
            pub mod assignment;
            pub mod document;
            pub mod manuscript;
            pub mod next_steps;
            pub mod progress;
            pub mod summary;
            pub mod timeline;
        }
        pub mod use_cases {
            pub mod view_manuscript_progress {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod manuscript_source;
                pub mod manuscript_source_in_memory;
                pub mod manuscript_source_rest;
            }
            pub mod wire;
        }
    }
}

pub mod shell;
