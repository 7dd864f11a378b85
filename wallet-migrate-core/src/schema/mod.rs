//! Destination schema - embedded DDL
//!
//! Both statements are `CREATE TABLE IF NOT EXISTS`, so provisioning is
//! idempotent. The column types and constraints must match what the mysql
//! storage plugin reads back; do not edit them without checking the plugin
//! side.

/// All DDL statements, embedded at compile time, in execution order
/// (`items` carries a foreign key into `wallets`)
pub const DDL_STATEMENTS: &[&str] = &[
    include_str!("wallets.sql"),
    include_str!("items.sql"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_idempotent_statements() {
        assert_eq!(DDL_STATEMENTS.len(), 2);
        for ddl in DDL_STATEMENTS {
            assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS"));
            assert!(ddl.contains("ENGINE=InnoDB DEFAULT CHARSET=ascii"));
        }
    }

    #[test]
    fn test_wallets_table_constraints() {
        let wallets = DDL_STATEMENTS[0];
        assert!(wallets.contains("`wallets`"));
        assert!(wallets.contains("UNIQUE KEY `wallet_name` (`name`)"));
    }

    #[test]
    fn test_items_table_constraints() {
        let items = DDL_STATEMENTS[1];
        assert!(items.contains("`items`"));
        assert!(items.contains("UNIQUE KEY `ux_items_wallet_id_type_name` (`wallet_id`, `type`, `name`)"));
        assert!(items.contains("ON DELETE CASCADE"));
        assert!(items.contains("ON UPDATE CASCADE"));
    }
}
