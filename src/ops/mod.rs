pub mod reconcile_ops;
