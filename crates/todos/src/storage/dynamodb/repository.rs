//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue, Select};
use aws_sdk_dynamodb::Client;

use todos_core::storage::{Result, TodoRepository};
use todos_core::todo::{Todo, UpdateTodoRequest};

use super::conversions::{attributes_to_update, item_to_todo, todo_to_item, TODO_ID};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn todo_exists(&self, todo_id: &str) -> Result<bool> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("todoId = :todoId")
            .expression_attribute_values(":todoId", AttributeValue::S(todo_id.to_string()))
            .select(Select::Count)
            .send()
            .await
            .map_err(map_query_error)?;

        tracing::debug!(todo_id = %todo_id, count = result.count(), "Existence query");

        Ok(result.count() != 0)
    }

    async fn get_todo(&self, todo_id: &str) -> Result<Option<Todo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(TODO_ID, AttributeValue::S(todo_id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_todo(
        &self,
        todo_id: &str,
        update: &UpdateTodoRequest,
    ) -> Result<UpdateTodoRequest> {
        // `name` is a DynamoDB reserved word, hence the #nm placeholder.
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(TODO_ID, AttributeValue::S(todo_id.to_string()))
            .update_expression("SET #nm = :name, dueDate = :dueDate, done = :done")
            .condition_expression("attribute_exists(todoId)")
            .expression_attribute_names("#nm", "name")
            .expression_attribute_values(":name", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(":dueDate", AttributeValue::S(update.due_date.clone()))
            .expression_attribute_values(":done", AttributeValue::Bool(update.done))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, todo_id))?;

        let attributes = result.attributes.unwrap_or_default();
        attributes_to_update(&attributes)
    }

    async fn delete_todo(&self, todo_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(TODO_ID, AttributeValue::S(todo_id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
