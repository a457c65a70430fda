//! Python module wrapper placed around converted script bodies.

use script_migrate_core::ScriptType;

/// Placeholder line the user replaces with the real migrated logic.
pub const LOGIC_PLACEHOLDER: &str = "# Add your migrated logic here";

/// Wraps a converted body in a runnable click-based Python module.
pub fn wrap_converted(script_name: &str, script_type: ScriptType, body: &str) -> String {
    format!(
        r#""""
{script_name}

Migrated from {script_type} script.
Generated by script-migrate.
"""

import os
import sys
import subprocess
import shutil
import re
from pathlib import Path
from typing import List, Optional, Dict, Any
import click
import logging

# Configure logging
logging.basicConfig(level=logging.INFO)
logger = logging.getLogger(__name__)

# Migrated code from {script_type} script
{body}

@click.command()
@click.option('--verbose', '-v', is_flag=True, help='Enable verbose output')
@click.option('--dry-run', is_flag=True, help='Show what would be done without executing')
def main(verbose: bool, dry_run: bool):
    """
    Main entry point for the migrated script.

    This function serves as the entry point for the migrated {script_type} script.
    """
    if verbose:
        logging.getLogger().setLevel(logging.DEBUG)

    logger.info("Starting migrated script: {script_name}")

    if dry_run:
        logger.info("Dry run mode - no changes will be made")
        return

    try:
        {LOGIC_PLACEHOLDER}
        # This is where the converted script logic would go
        pass

    except Exception as e:
        logger.error(f"Error executing migrated script: {{e}}")
        sys.exit(1)

    logger.info("Script completed successfully")

if __name__ == '__main__':
    main()
"#
    )
}
