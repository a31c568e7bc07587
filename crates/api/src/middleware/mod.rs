pub mod edge_secret;
