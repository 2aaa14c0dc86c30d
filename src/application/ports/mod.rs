pub mod corpus_port;
