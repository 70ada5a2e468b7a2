//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the four resource tables.

use super::params::SqlParam;
use crate::models::{NewArticle, NewComment};

/// Static description of one table: identifiers are only ever taken from here.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    /// Primary key (serial id or natural key).
    pub key: &'static str,
    /// Columns returned for a full row.
    pub columns: &'static [&'static str],
    /// Columns accepted by `sort_by`.
    pub sortable: &'static [&'static str],
    pub default_sort: &'static str,
}

pub const ARTICLES: Table = Table {
    name: "articles",
    key: "article_id",
    columns: &["article_id", "title", "body", "topic", "author", "created_at", "votes"],
    sortable: &["article_id", "author", "title", "topic", "created_at", "votes", "comment_count"],
    default_sort: "created_at",
};

pub const COMMENTS: Table = Table {
    name: "comments",
    key: "comment_id",
    columns: &["comment_id", "body", "article_id", "author", "votes", "created_at"],
    sortable: &["comment_id", "author", "article_id", "votes", "created_at", "body"],
    default_sort: "created_at",
};

pub const USERS: Table = Table {
    name: "users",
    key: "username",
    columns: &["username", "name", "avatar_url"],
    sortable: &["username"],
    default_sort: "username",
};

pub const TOPICS: Table = Table {
    name: "topics",
    key: "slug",
    columns: &["slug", "description"],
    sortable: &["slug"],
    default_sort: "slug",
};

/// Article list columns: everything but the body.
const ARTICLE_SUMMARY_COLUMNS: &[&str] = &["article_id", "title", "topic", "author", "created_at", "votes"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A validated sort: `column` is always one of a table's `sortable` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub order: SortOrder,
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn push_param(&mut self, v: impl Into<SqlParam>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn qualified(table: &str, column: &str) -> String {
    format!("{}.{}", quoted(table), quoted(column))
}

fn column_list(table: &Table, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| qualified(table.name, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Articles joined with their comment count, shared by the list and single-article reads.
fn articles_with_count(columns: &[&str]) -> String {
    format!(
        "SELECT {}, COUNT({}) AS {} FROM {} LEFT JOIN {} ON {} = {}",
        column_list(&ARTICLES, columns),
        qualified(COMMENTS.name, COMMENTS.key),
        quoted("comment_count"),
        quoted(ARTICLES.name),
        quoted(COMMENTS.name),
        qualified(COMMENTS.name, "article_id"),
        qualified(ARTICLES.name, ARTICLES.key),
    )
}

/// Article list filtered by exact-match columns, grouped for the comment count and sorted.
/// `filters` columns must be article columns; values are bound in order.
pub fn select_articles(filters: &[(&'static str, String)], sort: Sort) -> QueryBuf {
    let mut q = QueryBuf::default();
    let mut where_parts = Vec::new();
    for (col, val) in filters {
        let n = q.push_param(val.as_str());
        where_parts.push(format!("{} = ${}", qualified(ARTICLES.name, col), n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    // comment_count is an output alias, not a column of either table.
    let sort_expr = if sort.column == "comment_count" {
        quoted(sort.column)
    } else {
        qualified(ARTICLES.name, sort.column)
    };
    let dir = sort.order.as_sql();
    q.sql = format!(
        "{}{} GROUP BY {} ORDER BY {} {}, {} {}",
        articles_with_count(ARTICLE_SUMMARY_COLUMNS),
        where_clause,
        qualified(ARTICLES.name, ARTICLES.key),
        sort_expr,
        dir,
        qualified(ARTICLES.name, ARTICLES.key),
        dir,
    );
    q
}

/// One article with body and comment count.
pub fn select_article_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(id);
    q.sql = format!(
        "{} WHERE {} = ${} GROUP BY {}",
        articles_with_count(ARTICLES.columns),
        qualified(ARTICLES.name, ARTICLES.key),
        n,
        qualified(ARTICLES.name, ARTICLES.key),
    );
    q
}

/// Comments of one article, sorted.
pub fn select_comments_for_article(article_id: i32, sort: Sort) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(article_id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${} ORDER BY {} {}, {} {}",
        column_list(&COMMENTS, COMMENTS.columns),
        quoted(COMMENTS.name),
        qualified(COMMENTS.name, "article_id"),
        n,
        qualified(COMMENTS.name, sort.column),
        sort.order.as_sql(),
        qualified(COMMENTS.name, COMMENTS.key),
        sort.order.as_sql(),
    );
    q
}

/// Every row of a table, ordered by its key.
pub fn select_all(table: &Table) -> QueryBuf {
    QueryBuf {
        sql: format!(
            "SELECT {} FROM {} ORDER BY {}",
            column_list(table, table.columns),
            quoted(table.name),
            qualified(table.name, table.default_sort),
        ),
        params: Vec::new(),
    }
}

/// One row by primary key.
pub fn select_by_key(table: &Table, key: impl Into<SqlParam>) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(key);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(table, table.columns),
        quoted(table.name),
        qualified(table.name, table.key),
        n,
    );
    q
}

/// `SELECT EXISTS(...)` on the primary key; used to tell "no matches" from "no such entity".
pub fn exists(table: &Table, key: impl Into<SqlParam>) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(key);
    q.sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ${})",
        quoted(table.name),
        qualified(table.name, table.key),
        n,
    );
    q
}

/// INSERT an article; id, votes and created_at come from column defaults.
pub fn insert_article(article: &NewArticle) -> QueryBuf {
    let mut q = QueryBuf::default();
    let values = [
        ("title", &article.title),
        ("body", &article.body),
        ("topic", &article.topic),
        ("author", &article.author),
    ];
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val.as_str());
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(ARTICLES.name),
        cols.join(", "),
        placeholders.join(", "),
        column_list(&ARTICLES, ARTICLES.columns),
    );
    q
}

/// INSERT a comment on `article_id`.
pub fn insert_comment(article_id: i32, comment: &NewComment) -> QueryBuf {
    let mut q = QueryBuf::default();
    let body = q.push_param(comment.body.as_str());
    let article = q.push_param(article_id);
    let author = q.push_param(comment.author.as_str());
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES (${}, ${}, ${}) RETURNING {}",
        quoted(COMMENTS.name),
        quoted("body"),
        quoted("article_id"),
        quoted("author"),
        body,
        article,
        author,
        column_list(&COMMENTS, COMMENTS.columns),
    );
    q
}

/// Relative vote update in a single statement: `votes = votes + delta`.
pub fn increment_votes(table: &Table, id: i32, delta: i32) -> QueryBuf {
    let mut q = QueryBuf::default();
    let d = q.push_param(delta);
    let n = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} = {} + ${} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        quoted("votes"),
        qualified(table.name, "votes"),
        d,
        qualified(table.name, table.key),
        n,
        column_list(table, table.columns),
    );
    q
}

/// DELETE by id. Dependent rows go through the schema's ON DELETE CASCADE.
pub fn delete_by_id(table: &Table, id: i32) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(id);
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(table.name),
        qualified(table.name, table.key),
        n,
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sort() -> Sort {
        Sort {
            column: "created_at",
            order: SortOrder::Desc,
        }
    }

    #[test]
    fn article_list_without_filters_has_no_where() {
        let q = select_articles(&[], default_sort());
        assert!(!q.sql.contains("WHERE"));
        assert!(q.params.is_empty());
        assert!(q.sql.contains("LEFT JOIN \"comments\""));
        assert!(q.sql.contains("ORDER BY \"articles\".\"created_at\" DESC"));
        assert!(!q.sql.contains("\"articles\".\"body\""));
    }

    #[test]
    fn article_filters_bind_in_order() {
        let filters = [("author", "butter_bridge".to_string()), ("topic", "cats".to_string())];
        let q = select_articles(&filters, default_sort());
        assert!(q.sql.contains("WHERE \"articles\".\"author\" = $1 AND \"articles\".\"topic\" = $2"));
        assert_eq!(q.params, vec![SqlParam::from("butter_bridge"), SqlParam::from("cats")]);
    }

    #[test]
    fn comment_count_sorts_by_alias() {
        let sort = Sort {
            column: "comment_count",
            order: SortOrder::Asc,
        };
        let q = select_articles(&[], sort);
        assert!(q.sql.contains("ORDER BY \"comment_count\" ASC"));
    }

    #[test]
    fn single_article_includes_body_and_count() {
        let q = select_article_by_id(3);
        assert!(q.sql.contains("\"articles\".\"body\""));
        assert!(q.sql.contains("COUNT(\"comments\".\"comment_id\") AS \"comment_count\""));
        assert_eq!(q.params, vec![SqlParam::Int(3)]);
    }

    #[test]
    fn vote_increment_is_relative() {
        let q = increment_votes(&COMMENTS, 1, -5);
        assert!(q.sql.starts_with("UPDATE \"comments\" SET \"votes\" = \"comments\".\"votes\" + $1"));
        assert_eq!(q.params, vec![SqlParam::Int(-5), SqlParam::Int(1)]);
    }

    #[test]
    fn article_insert_leaves_defaults_to_the_store() {
        let article = NewArticle {
            author: "rogersop".into(),
            title: "new title".into(),
            body: "new article".into(),
            topic: "mitch".into(),
        };
        let q = insert_article(&article);
        assert!(q.sql.contains("(\"title\", \"body\", \"topic\", \"author\") VALUES ($1, $2, $3, $4)"));
        assert!(!q.sql.contains("\"votes\" ="));
        assert_eq!(q.params.len(), 4);
    }

    #[test]
    fn comment_insert_binds_article_from_path() {
        let comment = NewComment {
            author: "rogersop".into(),
            body: "new comment".into(),
        };
        let q = insert_comment(2, &comment);
        assert_eq!(q.params[1], SqlParam::Int(2));
    }

    #[test]
    fn exists_uses_primary_key() {
        let q = exists(&USERS, "lurker");
        assert_eq!(
            q.sql,
            "SELECT EXISTS(SELECT 1 FROM \"users\" WHERE \"users\".\"username\" = $1)"
        );
    }
}
