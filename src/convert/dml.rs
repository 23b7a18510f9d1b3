//! SELECT, INSERT, UPDATE and DELETE.
//!
//! Clauses are converted in the order they are written so parameter
//! numbers follow the query text.

use crate::ast::{self, DeleteStmt, InsertStmt, ResTarget, SelectStmt, SortBy, UpdateStmt};
use crate::dialect::{self, GroupByClause, Limit, Node, OrderByClause};
use crate::error::ConvertResult;

use super::Converter;

type LimitPair = (Option<Box<ast::Node>>, Option<Box<ast::Node>>);

impl Converter<'_> {
    pub(crate) fn convert_select(&mut self, n: &dialect::SelectStmt) -> ConvertResult<SelectStmt> {
        let target_list = self.convert_field_list(&n.fields)?;
        let from_clause = self.convert_table_refs(n.from.as_ref());
        let where_clause = self.convert_boxed(n.where_clause.as_deref())?;
        let group_clause = self.convert_group_by(n.group_by.as_ref())?;
        let having_clause = match &n.having {
            Some(having) => Some(Box::new(self.convert(&having.expr)?)),
            None => None,
        };
        let sort_clause = self.convert_order_by(n.order_by.as_ref())?;
        let (limit_count, limit_offset) = self.convert_limit(n.limit.as_ref())?;

        Ok(SelectStmt {
            distinct: n.distinct,
            target_list,
            from_clause,
            where_clause,
            group_clause,
            having_clause,
            sort_clause,
            limit_count,
            limit_offset,
            values_lists: Vec::new(),
        })
    }

    pub(crate) fn convert_group_by(
        &mut self,
        group: Option<&GroupByClause>,
    ) -> ConvertResult<Vec<ast::Node>> {
        let Some(group) = group else {
            return Ok(Vec::new());
        };
        group
            .items
            .iter()
            .map(|item| self.convert(&item.expr))
            .collect()
    }

    pub(crate) fn convert_order_by(
        &mut self,
        order: Option<&OrderByClause>,
    ) -> ConvertResult<Vec<SortBy>> {
        let Some(order) = order else {
            return Ok(Vec::new());
        };
        order
            .items
            .iter()
            .map(|item| self.convert_by_item(item))
            .collect()
    }

    /// Returns `(count, offset)`. `LIMIT offset, count` converts the offset first.
    fn convert_limit(&mut self, limit: Option<&Limit>) -> ConvertResult<LimitPair> {
        let Some(limit) = limit else {
            return Ok((None, None));
        };
        if limit.offset_first {
            let offset = self.convert_boxed(limit.offset.as_deref())?;
            let count = self.convert(&limit.count)?;
            Ok((Some(Box::new(count)), offset))
        } else {
            let count = self.convert(&limit.count)?;
            let offset = self.convert_boxed(limit.offset.as_deref())?;
            Ok((Some(Box::new(count)), offset))
        }
    }

    fn convert_rows(&mut self, rows: &[Vec<Node>]) -> ConvertResult<Vec<Vec<ast::Node>>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|value| self.convert(value))
                    .collect::<ConvertResult<Vec<_>>>()
            })
            .collect()
    }

    /// `INSERT ... SET a = x, b = y` is read as `INSERT ... (a, b) VALUES (x, y)`.
    pub(crate) fn convert_insert(&mut self, n: &dialect::InsertStmt) -> ConvertResult<InsertStmt> {
        let relation = self.single_relation("INSERT", &n.table)?;

        let mut cols: Vec<ResTarget> = n
            .columns
            .iter()
            .map(|column| ResTarget::column(column.name.clone()))
            .collect();
        let mut values_lists = self.convert_rows(&n.lists)?;
        if !n.setlist.is_empty() {
            let mut row = Vec::with_capacity(n.setlist.len());
            for assignment in &n.setlist {
                cols.push(ResTarget::column(assignment.column.name.clone()));
                row.push(self.convert(&assignment.expr)?);
            }
            values_lists.push(row);
        }

        let (mut select_stmt, unconverted) = match n.select.as_deref() {
            Some(select) => self.convert_query(select)?.or_default(),
            None => (SelectStmt::default(), None),
        };
        select_stmt.values_lists = values_lists;

        let on_duplicate = n
            .on_duplicate
            .iter()
            .map(|assignment| self.convert_assignment(assignment))
            .collect::<ConvertResult<Vec<_>>>()?;

        Ok(InsertStmt {
            relation,
            cols,
            select_stmt: Box::new(select_stmt),
            on_duplicate,
            unconverted,
            replace: n.is_replace,
            ignore: n.ignore,
        })
    }

    pub(crate) fn convert_update(&mut self, n: &dialect::UpdateStmt) -> ConvertResult<UpdateStmt> {
        let relation = self.single_relation("UPDATE", &n.table_refs)?;
        let target_list = n
            .list
            .iter()
            .map(|assignment| self.convert_assignment(assignment))
            .collect::<ConvertResult<Vec<_>>>()?;
        let where_clause = self.convert_boxed(n.where_clause.as_deref())?;
        if let Some(order) = &n.order {
            self.skip_order_by(order);
        }
        let (limit_count, _) = self.convert_limit(n.limit.as_ref())?;

        Ok(UpdateStmt {
            relation,
            target_list,
            where_clause,
            limit_count,
        })
    }

    pub(crate) fn convert_delete(&mut self, n: &dialect::DeleteStmt) -> ConvertResult<DeleteStmt> {
        let relation = self.single_relation("DELETE", &n.table_refs)?;
        let where_clause = self.convert_boxed(n.where_clause.as_deref())?;
        if let Some(order) = &n.order {
            self.skip_order_by(order);
        }
        let (limit_count, _) = self.convert_limit(n.limit.as_ref())?;

        Ok(DeleteStmt {
            relation,
            where_clause,
            limit_count,
        })
    }
}
