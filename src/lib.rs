pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod id_server;
    }
}

pub mod modules {
    pub mod spam {
        pub mod core {
            pub mod message;
        }
        pub mod use_cases {
            pub mod submit_spam {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transform_to_ham {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod message_store;
                pub mod message_store_in_memory;
            }
        }
    }
    pub mod transformer {
        pub mod core {
            pub mod classifier;
            pub mod lexicon;
            pub mod similar;
            pub mod tokenize;
            pub mod training;
            pub mod transformer;
        }
        pub mod use_cases {
            pub mod evaluate_transformer {
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
                pub mod report;
            }
        }
    }
}

pub mod shell;
