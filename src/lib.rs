pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod errors;
            pub mod kind;
            pub mod ports;
            pub mod record;
            pub mod rendered;
        }
        pub mod dispatch {
            pub mod category;
            pub mod discriminator;
            pub mod handler;
            pub mod leaf_handlers;
            pub mod top;
        }
        pub mod use_cases {
            pub mod report_event {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_sink;
                pub mod stream_sink;
            }
        }
    }
}

pub mod shell;
