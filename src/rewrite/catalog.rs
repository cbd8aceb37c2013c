//! The rewrite rule table
//!
//! One full rule per introspection query the client tool is known to issue,
//! in evaluation order, plus the backtick partial rule. Templates must match
//! the client-issued statement byte for byte, whitespace included; the odd
//! runs of tabs and spaces below are exactly what the tool sends. Every
//! replacement binds the same number of `?` placeholders as its template, in
//! the same order -- placeholders with no meaning in the target dialect are
//! kept alive inside tautologies such as `coalesce(?, ?, ?, 'x') IS NOT
//! NULL` so the caller's parameter list still binds.

use super::{FullRule, PartialRule};
use crate::dialect::Dialect;

/// All full rules, in evaluation order.
pub fn full_rules() -> Vec<FullRule> {
    vec![
        show_databases(),
        show_schemas(),
        show_tables(),
        show_table_columns(),
        show_indexes(),
        show_index_details(),
        show_table_index_columns(),
        show_table_constraints(),
        show_check_constraints(),
        show_views(),
        show_view_columns_short(),
        show_view_columns(),
        show_view_details(),
        show_procedures(),
        show_functions(),
        show_routine_details(),
        show_triggers(),
        show_trigger_details(),
    ]
}

/// All partial rules. Backtick-quoted identifiers become double-quoted ones
/// for every backend that does not quote with backticks natively.
pub fn partial_rules() -> Vec<PartialRule> {
    vec![PartialRule {
        name: "backtick_quotes",
        from: '`',
        to: '"',
        skip: &[Dialect::MySql, Dialect::Sqlite],
    }]
}

fn show_databases() -> FullRule {
    FullRule {
        name: "show_databases",
        template: "show databases",
        replacements: &[
            // databases are not exposed through information_schema
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT datname\n",
                    "  FROM pg_database\n",
                    " WHERE datistemplate = false\n",
                    " ORDER BY datname",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT database_name\n",
                    "  FROM information_schema.databases\n",
                    " ORDER BY database_name",
                ),
            ),
            (
                &[Dialect::H2],
                "SELECT 'PUBLIC' AS database_name",
            ),
            (
                &[Dialect::Sqlite],
                "SELECT name AS database_name FROM pragma_database_list()",
            ),
        ],
    }
}

fn show_schemas() -> FullRule {
    FullRule {
        name: "show_schemas",
        template: "select SCHEMA_NAME from information_schema.schemata",
        replacements: &[
            // the client expects the column name in upper case
            (
                &[Dialect::Postgres, Dialect::Snowflake, Dialect::H2],
                concat!(
                    "SELECT schema_name AS \"SCHEMA_NAME\"\n",
                    "  FROM information_schema.schemata\n",
                    " ORDER BY schema_name",
                ),
            ),
            (
                &[Dialect::Sqlite],
                "SELECT 'main' AS \"SCHEMA_NAME\"",
            ),
        ],
    }
}

fn show_tables() -> FullRule {
    FullRule {
        name: "show_tables",
        template: concat!(
            "select TABLE_NAME from information_schema.Tables where cast(TABLE_SCHEMA as binary) = ?  \n",
            "\t\t\t\t\t\t\t\tand (TABLE_TYPE = 'BASE TABLE' OR table_schema='information_schema')\n",
            "                        ",
        ),
        replacements: &[
            // case-sensitive schema name
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT table_name AS \"TABLE_NAME\"\n",
                    "  FROM information_schema.tables\n",
                    " WHERE table_schema = ?\n",
                    "   AND ( table_type = 'BASE TABLE'\n",
                    "    OR table_schema = 'information_schema' )\n",
                    " ORDER BY table_name",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT table_name\n",
                    "  FROM information_schema.tables\n",
                    " WHERE table_schema = ?\n",
                    "   AND ( table_type = 'BASE TABLE'\n",
                    "    OR table_schema = 'INFORMATION_SCHEMA' )\n",
                    " ORDER BY table_name",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT table_name\n",
                    "  FROM information_schema.tables\n",
                    " WHERE table_schema = ?\n",
                    "   AND ( table_type = 'TABLE'\n",
                    "    OR table_schema = 'INFORMATION_SCHEMA' )\n",
                    " ORDER BY table_name",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name AS \"TABLE_NAME\"\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'table'\n",
                    "   AND ? IS NOT NULL\n",
                    " ORDER BY name",
                ),
            ),
        ],
    }
}

fn show_table_columns() -> FullRule {
    FullRule {
        name: "show_table_columns",
        template: concat!(
            "select  COLUMN_NAME , ORDINAL_POSITION , COLUMN_DEFAULT , IS_NULLABLE ,\n",
            " DATA_TYPE , NUMERIC_PRECISION , NUMERIC_SCALE , COLUMN_COMMENT\n",
            "from information_schema.Columns where\n",
            "COLLATION(?) NOT LIKE '%chinese%' \n",
            "and COLLATION(?) NOT LIKE '%japanese%' \n",
            "and COLLATION(?) NOT LIKE '%korean%'\n",
            "  and binary TABLE_NAME = ?\n",
            " AND cast(TABLE_SCHEMA as binary)=? \n",
            " UNION\n",
            " select  COLUMN_NAME , ORDINAL_POSITION , COLUMN_DEFAULT , IS_NULLABLE ,\n",
            " DATA_TYPE , NUMERIC_PRECISION , NUMERIC_SCALE , COLUMN_COMMENT\n",
            "from information_schema.Columns where\n",
            "(COLLATION(?) LIKE '%chinese%' \n",
            "or COLLATION(?) LIKE '%japanese%' \n",
            "or COLLATION(?) LIKE '%korean%' )\n",
            " and TABLE_NAME = ?\n",
            " AND cast(TABLE_SCHEMA as binary)=?",
        ),
        replacements: &[
            // no column comments
            (
                &[Dialect::Postgres, Dialect::H2],
                concat!(
                    "SELECT column_name,\n",
                    "       ordinal_position,\n",
                    "       column_default,\n",
                    "       is_nullable,\n",
                    "       data_type,\n",
                    "       numeric_precision,\n",
                    "       numeric_scale,\n",
                    "       NULL AS column_comment\n",
                    "  FROM information_schema.columns\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY ordinal_position",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT column_name,\n",
                    "       ordinal_position,\n",
                    "       column_default,\n",
                    "       is_nullable,\n",
                    "       data_type,\n",
                    "       numeric_precision,\n",
                    "       numeric_scale,\n",
                    "       comment AS column_comment\n",
                    "  FROM information_schema.columns\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY ordinal_position",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name        AS column_name,\n",
                    "       type        AS data_type,\n",
                    "       CASE `notnull`\n",
                    "          WHEN 0 THEN\n",
                    "             'YES'\n",
                    "          WHEN 42 THEN\n",
                    "             coalesce(?, ?, ?)\n",
                    "          ELSE\n",
                    "             'NO'\n",
                    "       END         AS is_nullable,\n",
                    "       dflt_value  AS column_default\n",
                    "  FROM pragma_table_info (?)\n",
                    " WHERE coalesce(?, ?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY cid",
                ),
            ),
        ],
    }
}

fn show_indexes() -> FullRule {
    FullRule {
        name: "show_indexes",
        template: concat!(
            "\n",
            "                        SELECT DISTINCT(CONCAT(INDEX_NAME,' (',TABLE_NAME,')')) IND_NAME, INDEX_NAME, TABLE_NAME FROM INFORMATION_SCHEMA.STATISTICS WHERE cast(TABLE_SCHEMA as binary) = ?",
        ),
        replacements: &[
            // no dictionary view for index columns
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT (concat(indexname, ' (', tablename, ')')) AS \"IND_NAME\",\n",
                    "       indexname                                 AS \"INDEX_NAME\",\n",
                    "       tablename                                 AS \"TABLE_NAME\"\n",
                    "  FROM pg_indexes\n",
                    " WHERE schemaname = ?\n",
                    "  ORDER BY 1",
                ),
            ),
            // no indexes in Snowflake
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT NULL  AS ind_name,\n",
                    "       NULL  AS index_name,\n",
                    "       NULL  AS table_name\n",
                    " WHERE 'x' = ?",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT (concat(index_name, ' (', table_name, ')')) AS \"IND_NAME\",\n",
                    "       index_name                                  AS \"INDEX_NAME\",\n",
                    "       table_name                                  AS \"TABLE_NAME\"\n",
                    "  FROM information_schema.indexes\n",
                    " WHERE table_schema = ?\n",
                    " ORDER BY 1",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name || ' (' || tbl_name || ')' AS \"IND_NAME\",\n",
                    "       name                            AS \"INDEX_NAME\",\n",
                    "       tbl_name                        AS \"TABLE_NAME\"\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'index' \n",
                    "   AND ? IS NOT NULL\n",
                    " ORDER BY 1",
                ),
            ),
        ],
    }
}

fn show_index_details() -> FullRule {
    FullRule {
        name: "show_index_details",
        template: concat!(
            "select INDEX_TYPE, TABLE_NAME, COLUMN_NAME, SEQ_IN_INDEX, NON_UNIQUE, COLLATION, CARDINALITY, SUB_PART, \n",
            "\t\t\t\tPACKED, NULLABLE, COMMENT\n",
            "\t\t\t\tFROM INFORMATION_SCHEMA.STATISTICS WHERE INDEX_NAME = ? AND cast(TABLE_SCHEMA as binary) = ?\n",
            "\t\t\t\tORDER BY INDEX_NAME, SEQ_IN_INDEX",
        ),
        replacements: &[
            // no dictionary view for index columns
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT i.relname    AS index_name,\n",
                    "       a.attname    AS column_name,\n",
                    "       a.attnum     AS seq_in_index\n",
                    "  FROM pg_namespace  s\n",
                    "  JOIN pg_class      t  ON t.relnamespace = s.oid\n",
                    "  JOIN pg_index      ix ON ix.indrelid = t.oid\n",
                    "  JOIN pg_class      i  ON i.oid = ix.indexrelid\n",
                    "  JOIN pg_attribute  a  ON a.attrelid = t.oid AND a.attnum = ANY (ix.indkey)\n",
                    " WHERE t.relkind = 'r'\n",
                    "   AND i.relname = ?\n",
                    "   AND s.nspname = ?\n",
                    " ORDER BY i.relname, a.attnum",
                ),
            ),
            // no indexes in Snowflake
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT NULL  AS index_name,\n",
                    "       NULL  AS index_type,\n",
                    "       NULL  AS column_name,\n",
                    "       NULL  AS seq_in_index,\n",
                    "       NULL  AS non_unique,\n",
                    "       NULL  AS collation,\n",
                    "       NULL  AS cardinality,\n",
                    "       NULL  AS sub_part,\n",
                    "       NULL  AS packed,\n",
                    "       NULL  AS nullable,\n",
                    "       NULL  AS comment\n",
                    " WHERE 'x' IN (?, ?)",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT index_name,\n",
                    "       index_type_name,\n",
                    "       column_name,\n",
                    "       sql\n",
                    "  FROM information_schema.indexes\n",
                    " WHERE index_name = ?\n",
                    "   AND table_schema = ?",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT s.name    AS index_name,\n",
                    "       i.name    AS column_name,\n",
                    "       cid       AS seq_in_index\n",
                    "  FROM sqlite_schema s,\n",
                    "       pragma_index_info (?) i\n",
                    " WHERE type = 'index'\n",
                    "   AND ? IS NOT NULL\n",
                    " ORDER BY i.cid",
                ),
            ),
        ],
    }
}

fn show_table_index_columns() -> FullRule {
    FullRule {
        name: "show_table_index_columns",
        template: concat!(
            "select INDEX_NAME, INDEX_TYPE, COLUMN_NAME, SEQ_IN_INDEX, NON_UNIQUE, COLLATION, CARDINALITY, SUB_PART, \n",
            "PACKED, NULLABLE, COMMENT FROM INFORMATION_SCHEMA.STATISTICS \n",
            "WHERE (COLLATION(?) NOT LIKE '%chinese%' \n",
            "or COLLATION(?) NOT LIKE '%japanese%' \n",
            "or COLLATION(?) NOT LIKE '%korean%') \n",
            "and cast(TABLE_NAME as binary) = ? AND cast(TABLE_SCHEMA as binary) = ? \n",
            "UNION \n",
            "select INDEX_NAME, INDEX_TYPE, COLUMN_NAME, SEQ_IN_INDEX, NON_UNIQUE, COLLATION, CARDINALITY, SUB_PART, \n",
            "PACKED, NULLABLE, COMMENT FROM INFORMATION_SCHEMA.STATISTICS \n",
            "WHERE (COLLATION(?) LIKE '%chinese%' \n",
            "or COLLATION(?) LIKE '%japanese%' \n",
            "or COLLATION(?) LIKE '%korean%') \n",
            "and TABLE_NAME = ? AND TABLE_SCHEMA = ? \n",
            "ORDER BY INDEX_NAME, SEQ_IN_INDEX",
        ),
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT i.relname    AS index_name,\n",
                    "       a.attname    AS column_name,\n",
                    "       a.attnum     AS seq_in_index\n",
                    "  FROM pg_namespace  s\n",
                    "  JOIN pg_class      t  ON t.relnamespace = s.oid\n",
                    "  JOIN pg_index      ix ON ix.indrelid = t.oid\n",
                    "  JOIN pg_class      i  ON i.oid = ix.indexrelid\n",
                    "  JOIN pg_attribute  a  ON a.attrelid = t.oid AND a.attnum = ANY (ix.indkey)\n",
                    " WHERE t.relkind = 'r'\n",
                    "   AND coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND t.relname = ?\n",
                    "   AND s.nspname = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY i.relname, a.attnum",
                ),
            ),
            // no indexes in Snowflake
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT NULL  AS index_name,\n",
                    "       NULL  AS index_type,\n",
                    "       NULL  AS column_name,\n",
                    "       NULL  AS seq_in_index,\n",
                    "       NULL  AS non_unique,\n",
                    "       NULL  AS collation,\n",
                    "       NULL  AS cardinality,\n",
                    "       NULL  AS sub_part,\n",
                    "       NULL  AS packed,\n",
                    "       NULL  AS nullable,\n",
                    "       NULL  AS comment\n",
                    " WHERE 'x' IN (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT index_name,\n",
                    "       column_name,\n",
                    "       ordinal_position,\n",
                    "       sql\n",
                    "  FROM information_schema.indexes\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY index_name,\n",
                    "          ordinal_position",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT DISTINCT\n",
                    "       i.name     AS index_name,\n",
                    "       c.name     AS column_name,\n",
                    "       c.seqno    AS seq_in_index,\n",
                    "       CASE i.`unique`\n",
                    "          WHEN 0   THEN\n",
                    "             'NO'\n",
                    "          WHEN 42  THEN\n",
                    "             coalesce(?, ?, ?)\n",
                    "          ELSE\n",
                    "             'YES'\n",
                    "       END        AS is_unique\n",
                    "  FROM sqlite_schema s,\n",
                    "       pragma_index_list (?) i,\n",
                    "       pragma_index_info (i.name) c\n",
                    " WHERE s.type = 'table'\n",
                    "   AND coalesce(?, ?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY c.seqno",
                ),
            ),
        ],
    }
}

fn show_table_constraints() -> FullRule {
    FullRule {
        name: "show_table_constraints",
        template: concat!(
            "SELECT CONSTRAINT_NAME, CONSTRAINT_TYPE FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS\n",
            "\t    \t\tWHERE TABLE_NAME = ? AND cast(TABLE_SCHEMA as binary) = ?",
        ),
        replacements: &[
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT constraint_name, constraint_type \n",
                    "  FROM (\n",
                    "         SELECT s.tbl_name    AS table_name,\n",
                    "                i.name        AS constraint_name,\n",
                    "                i.origin      AS constraint_type\n",
                    "           FROM sqlite_schema s,\n",
                    "                pragma_index_list (s.tbl_name) i\n",
                    "          WHERE s.type = 'index'\n",
                    "         UNION\n",
                    "         SELECT s.name           AS table_name,\n",
                    "                f.`table`\n",
                    "                || '_fk_'\n",
                    "                || ( f.seq + 1 ) AS constraint_name,\n",
                    "                'fk'             AS constraint_type\n",
                    "           FROM sqlite_schema s,\n",
                    "                pragma_foreign_key_list (s.name) f\n",
                    "          WHERE s.type = 'table'\n",
                    "       )\n",
                    "  WHERE table_name = ?\n",
                    "    AND ? IS NOT NULL",
                ),
            ),
            (
                &[Dialect::Postgres, Dialect::Snowflake, Dialect::H2],
                concat!(
                    "SELECT constraint_name,\n",
                    "       constraint_type\n",
                    "  FROM information_schema.table_constraints\n",
                    " WHERE table_name = ?\n",
                    "   AND table_schema = ?",
                ),
            ),
        ],
    }
}

fn show_check_constraints() -> FullRule {
    FullRule {
        name: "show_check_constraints",
        template: concat!(
            "SELECT t.table_schema, \n",
            "  t.table_name, \n",
            "  t.constraint_name, \n",
            "  t.constraint_type, \n",
            "  t.is_deferrable, \n",
            "  t.initially_deferred, \n",
            "  c.check_clause \n",
            "FROM information_schema.check_constraints c, \n",
            "  information_schema.table_constraints t \n",
            "WHERE t.table_schema    = ? \n",
            "AND t.table_name        = ? \n",
            "AND t.constraint_type   = 'CHECK' \n",
            "AND c.constraint_name   = t.constraint_name \n",
            "AND c.constraint_schema = t.constraint_schema",
        ),
        replacements: &[
            // no check constraints view
            (
                &[Dialect::Snowflake, Dialect::Sqlite, Dialect::H2],
                concat!(
                    "SELECT NULL  AS table_schema,\n",
                    "       NULL  AS table_name,\n",
                    "       NULL  AS constraint_name,\n",
                    "       NULL  AS constraint_type,\n",
                    "       NULL  AS is_deferrable,\n",
                    "       NULL  AS initially_deferred,\n",
                    "       NULL  AS check_clause\n",
                    " WHERE 'x' IN (?, ?)",
                ),
            ),
        ],
    }
}

fn show_views() -> FullRule {
    FullRule {
        name: "show_views",
        template: "select TABLE_NAME from information_schema.views where cast(TABLE_SCHEMA as binary) = ?",
        replacements: &[
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name AS \"TABLE_NAME\"\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'view'\n",
                    "   AND ? IS NOT NULL\n",
                    " ORDER BY name",
                ),
            ),
            (
                &[Dialect::Postgres, Dialect::Snowflake, Dialect::H2],
                concat!(
                    "SELECT table_name AS \"TABLE_NAME\"\n",
                    "  FROM information_schema.views\n",
                    " WHERE table_schema = ?\n",
                    " ORDER BY table_name",
                ),
            ),
        ],
    }
}

fn show_view_columns_short() -> FullRule {
    FullRule {
        name: "show_view_columns_short",
        template: "select COLUMN_NAME from information_schema.Columns where cast(TABLE_SCHEMA as binary) = ? and cast(TABLE_NAME as binary) = ?",
        replacements: &[
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name AS \"COLUMN_NAME\",\n",
                    "      ?    AS schema_name\n",
                    "  FROM pragma_table_info (?)\n",
                    " ORDER BY cid",
                ),
            ),
            (
                &[Dialect::Postgres, Dialect::Snowflake, Dialect::H2],
                concat!(
                    "SELECT column_name AS \"COLUMN_NAME\"\n",
                    "  FROM information_schema.columns\n",
                    " WHERE table_schema = ?\n",
                    "   AND table_name = ?\n",
                    " ORDER BY ordinal_position",
                ),
            ),
        ],
    }
}

fn show_view_columns() -> FullRule {
    FullRule {
        name: "show_view_columns",
        template: concat!(
            "select COLUMN_NAME , ORDINAL_POSITION , COLUMN_DEFAULT , IS_NULLABLE , \n",
            "\t\t\t\t\t\t\t\tDATA_TYPE , NUMERIC_PRECISION , NUMERIC_SCALE , COLUMN_COMMENT \n",
            "\t\t\t\t\t\t\t\tfrom information_schema.Columns where \n",
            "\t\t\t\t\t\t\t\t(COLLATION(?) NOT LIKE '%chinese%' \n",
            "                                and COLLATION(?) NOT LIKE '%japanese%' \n",
            "                                and COLLATION(?) NOT LIKE '%korean%')\n",
            "                                and cast(TABLE_NAME as binary) = ?\n",
            "                                AND cast(TABLE_SCHEMA as binary)= ? \n",
            "                         UNION\n",
            "                         select COLUMN_NAME , ORDINAL_POSITION , COLUMN_DEFAULT , IS_NULLABLE ,\n",
            "                                DATA_TYPE , NUMERIC_PRECISION , NUMERIC_SCALE , COLUMN_COMMENT\n",
            "                                from information_schema.Columns where\n",
            "                                (COLLATION(?) LIKE '%chinese%' \n",
            "                                or COLLATION(?) LIKE '%japanese%' \n",
            "                                or COLLATION(?) LIKE '%korean%')\n",
            "                                and TABLE_NAME = ?\n",
            "                                AND TABLE_SCHEMA = ?",
        ),
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT column_name,\n",
                    "       ordinal_position,\n",
                    "       column_default,\n",
                    "       is_nullable,\n",
                    "       data_type,\n",
                    "       numeric_precision,\n",
                    "       numeric_scale,\n",
                    "       NULL AS column_comment\n",
                    "  FROM information_schema.columns\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY ordinal_position",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT column_name,\n",
                    "       ordinal_position,\n",
                    "       column_default,\n",
                    "       is_nullable,\n",
                    "       data_type,\n",
                    "       numeric_precision,\n",
                    "       numeric_scale,\n",
                    "       comment AS column_comment\n",
                    "  FROM information_schema.columns\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY ordinal_position",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT column_name,\n",
                    "       ordinal_position,\n",
                    "       column_default,\n",
                    "       is_nullable,\n",
                    "       data_type,\n",
                    "       numeric_precision,\n",
                    "       numeric_scale,\n",
                    "       remarks\n",
                    "  FROM information_schema.columns\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY ordinal_position",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name        AS column_name,\n",
                    "       type        AS data_type,\n",
                    "       CASE `notnull`\n",
                    "          WHEN 0 THEN\n",
                    "             'YES'\n",
                    "          WHEN 42 THEN\n",
                    "             coalesce(?, ?, ?)\n",
                    "          ELSE\n",
                    "             'NO'\n",
                    "       END         AS is_nullable,\n",
                    "       dflt_value  AS column_default\n",
                    "  FROM pragma_table_info (?)\n",
                    " WHERE coalesce(?, ?, ?, ?, ?, ?, 'x') IS NOT NULL\n",
                    " ORDER BY cid",
                ),
            ),
        ],
    }
}

fn show_view_details() -> FullRule {
    FullRule {
        name: "show_view_details",
        template: concat!(
            "SELECT VIEW_DEFINITION, CHECK_OPTION, IS_UPDATABLE, DEFINER, SECURITY_TYPE FROM\n",
            "    \t\t\t           INFORMATION_SCHEMA.VIEWS WHERE (COLLATION(?) NOT LIKE '%chinese%' \n",
            "                           and COLLATION(?) NOT LIKE '%japanese%' \n",
            "                           and COLLATION(?) NOT LIKE '%korean%')\n",
            "                           and cast(TABLE_NAME as binary) = ? AND cast(TABLE_SCHEMA as binary)=?\n",
            "                         UNION\n",
            "                         SELECT VIEW_DEFINITION, CHECK_OPTION, IS_UPDATABLE, DEFINER, SECURITY_TYPE FROM\n",
            "    \t\t\t           INFORMATION_SCHEMA.VIEWS WHERE (COLLATION(?) LIKE '%chinese%' \n",
            "                           or COLLATION(?) NOT LIKE '%japanese%' \n",
            "                           or COLLATION(?) NOT LIKE '%korean%')\n",
            "                           and TABLE_NAME = ? AND TABLE_SCHEMA = ?",
        ),
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT view_definition,\n",
                    "       check_option,\n",
                    "       is_updatable,\n",
                    "       is_insertable_into,\n",
                    "       is_trigger_updatable,\n",
                    "       is_trigger_deletable,\n",
                    "       is_trigger_insertable_into\n",
                    "  FROM information_schema.views\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT view_definition,\n",
                    "       check_option,\n",
                    "       is_updatable,\n",
                    "       insertable_into,\n",
                    "       is_secure,\n",
                    "       created,\n",
                    "       last_altered,\n",
                    "       comment\n",
                    "  FROM information_schema.views\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT view_definition,\n",
                    "       check_option,\n",
                    "       is_updatable,\n",
                    "       status,\n",
                    "       remarks\n",
                    "  FROM information_schema.views\n",
                    " WHERE coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND table_name = ?\n",
                    "   AND table_schema = ?\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT sql AS view_definition\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'view'\n",
                    "   AND coalesce(?, ?, ?, 'x') IS NOT NULL\n",
                    "   AND name = ?\n",
                    "   AND ? IS NOT NULL\n",
                    "   AND coalesce(?, ?, ?, ?, ?, 'x') IS NOT NULL",
                ),
            ),
        ],
    }
}

fn show_procedures() -> FullRule {
    FullRule {
        name: "show_procedures",
        template: "select SPECIFIC_NAME from information_schema.routines where ROUTINE_TYPE = 'PROCEDURE' and cast(ROUTINE_SCHEMA as binary) = ?",
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT p.proname AS \"SPECIFIC_NAME\"\n",
                    "  FROM pg_proc       p\n",
                    "  JOIN pg_namespace  n\n",
                    "    ON p.pronamespace = n.oid\n",
                    " WHERE p.prokind = 'p'\n",
                    "   AND n.nspname = ?",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT procedure_name AS specific_name\n",
                    "  FROM information_schema.procedures\n",
                    " WHERE procedure_schema = ?\n",
                    " ORDER BY procedure_name",
                ),
            ),
            (
                &[Dialect::H2, Dialect::Sqlite],
                "SELECT NULL AS specific_name WHERE 'x' = ?",
            ),
        ],
    }
}

fn show_functions() -> FullRule {
    FullRule {
        name: "show_functions",
        template: "select SPECIFIC_NAME from information_schema.routines where ROUTINE_TYPE = 'FUNCTION' and cast(ROUTINE_SCHEMA as binary) = ?",
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT routine_name AS \"SPECIFIC_NAME\"\n",
                    "  FROM information_schema.routines\n",
                    " WHERE routine_type = 'FUNCTION'\n",
                    "   AND routine_schema = ?\n",
                    " ORDER BY specific_name",
                ),
            ),
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT function_name AS specific_name\n",
                    "  FROM information_schema.functions\n",
                    " WHERE function_schema = ?\n",
                    " ORDER BY function_name",
                ),
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT alias_name AS specific_name\n",
                    "  FROM information_schema.function_aliases\n",
                    " WHERE alias_schema = ?",
                ),
            ),
            (
                &[Dialect::Sqlite],
                "SELECT NULL AS specific_name WHERE 'x' = ?",
            ),
        ],
    }
}

fn show_routine_details() -> FullRule {
    FullRule {
        name: "show_routine_details",
        template: "select routine_definition from information_schema.routines where cast(routine_schema as binary) = ? and routine_name = ?",
        replacements: &[
            // one view covers functions and procedures, as in MySQL
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT routine_definition\n",
                    "  FROM information_schema.routines\n",
                    " WHERE routine_schema = ?\n",
                    "   AND routine_name = ?\n",
                ),
            ),
            // dedicated views for functions and procedures
            (
                &[Dialect::Snowflake],
                concat!(
                    "SELECT routine_definition\n",
                    "  FROM (\n",
                    "          SELECT function_schema      AS routine_schema,\n",
                    "                 function_name        AS routine_name,\n",
                    "                 function_definition  AS routine_definition\n",
                    "            FROM information_schema.functions\n",
                    "          UNION ALL\n",
                    "          SELECT procedure_schema      AS routine_schema,\n",
                    "                 procedure_name        AS routine_name,\n",
                    "                 procedure_definition  AS routine_definition\n",
                    "            FROM information_schema.procedures\n",
                    "       )\n",
                    " WHERE routine_schema = ?\n",
                    "   AND routine_name = ?",
                ),
            ),
            // H2 has functions only, no procedures
            (
                &[Dialect::H2],
                concat!(
                    "SELECT source\n",
                    "  FROM information_schema.function_aliases\n",
                    " WHERE alias_schema = ?\n",
                    "   AND alias_name = ?",
                ),
            ),
            (
                &[Dialect::Sqlite],
                "SELECT NULL AS routine_definition WHERE 'x' IN (?, ?)",
            ),
        ],
    }
}

fn show_triggers() -> FullRule {
    FullRule {
        name: "show_triggers",
        template: "select TRIGGER_NAME from information_schema.triggers  where trigger_schema = ?  ",
        replacements: &[
            (
                &[Dialect::Postgres, Dialect::H2],
                concat!(
                    "SELECT trigger_name AS \"TRIGGER_NAME\"\n",
                    "  FROM information_schema.triggers\n",
                    " WHERE trigger_schema = ?\n",
                    " ORDER BY trigger_name",
                ),
            ),
            // no triggers in Snowflake
            (
                &[Dialect::Snowflake],
                "SELECT null AS trigger_name WHERE 'x' = ?",
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT name AS \"TRIGGER_NAME\"\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'trigger'\n",
                    "   AND ? IS NOT NULL",
                ),
            ),
        ],
    }
}

fn show_trigger_details() -> FullRule {
    FullRule {
        name: "show_trigger_details",
        template: "select action_statement from information_schema.triggers where cast(trigger_schema as binary) = ? and trigger_name = ?",
        replacements: &[
            (
                &[Dialect::Postgres],
                concat!(
                    "SELECT action_statement\n",
                    "  FROM information_schema.triggers\n",
                    " WHERE trigger_schema = ?\n",
                    "   AND trigger_name = ?",
                ),
            ),
            // no triggers in Snowflake
            (
                &[Dialect::Snowflake],
                "SELECT NULL AS action_statement WHERE 'x' IN (?, ?)",
            ),
            (
                &[Dialect::H2],
                concat!(
                    "SELECT sql\n",
                    "  FROM information_schema.triggers\n",
                    " WHERE trigger_schema = ?\n",
                    "   AND trigger_name = ?",
                ),
            ),
            (
                &[Dialect::Sqlite],
                concat!(
                    "SELECT sql\n",
                    "  FROM sqlite_schema\n",
                    " WHERE type = 'trigger'\n",
                    "   AND ? IS NOT NULL\n",
                    "   AND name = ?",
                ),
            ),
        ],
    }
}
