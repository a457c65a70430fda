//! Python source fragments shared by the generator templates.
//!
//! Fragments are inserted verbatim as format arguments, so braces here are
//! literal Python braces.

pub const STANDARD_IMPORTS: &[&str] = &[
    "import os",
    "import sys",
    "import subprocess",
    "import shutil",
    "import tempfile",
    "from pathlib import Path",
    "from typing import List, Optional, Dict, Any, Union",
    "import logging",
    "from dataclasses import dataclass, field, asdict",
    "from datetime import datetime",
    "import click",
];

pub const CONCURRENT_IMPORTS: &[&str] =
    &["from concurrent.futures import ThreadPoolExecutor, as_completed"];

pub const PERFORMANCE_IMPORTS: &[&str] = &["import time", "import json", "import statistics"];

pub const LOGGING_SETUP: &str = r#"# Configure logging
logging.basicConfig(
    level=logging.INFO,
    format='%(asctime)s - %(name)s - %(levelname)s - %(message)s'
)
logger = logging.getLogger(__name__)"#;

pub const CONFIG_CLASS: &str = r#"@dataclass
class Config:
    """Configuration class for the tool."""
    verbose: bool = False
    dry_run: bool = False
    output_dir: Path = field(default_factory=Path.cwd)
    parallel: int = 4
    clean: bool = False
    output: Optional[str] = None

    def __post_init__(self):
        """Post-initialization processing."""
        if isinstance(self.output_dir, str):
            self.output_dir = Path(self.output_dir)
        self.output_dir.mkdir(parents=True, exist_ok=True)"#;

pub const RESULT_CLASS: &str = r#"@dataclass
class Result:
    """Result class for operation outcomes."""
    success: bool
    message: str
    data: Optional[Dict[str, Any]] = None
    timestamp: Optional[datetime] = None

    def __post_init__(self):
        """Post-initialization processing."""
        if self.timestamp is None:
            self.timestamp = datetime.now()

    def to_dict(self) -> Dict[str, Any]:
        """Convert result to dictionary."""
        return asdict(self)"#;

pub const RUN_COMMAND: &str = r#"def run_command(
    command: Union[str, List[str]],
    cwd: Optional[Path] = None,
    capture_output: bool = True,
    check: bool = True,
    timeout: Optional[int] = None
) -> subprocess.CompletedProcess:
    """
    Run a command using subprocess.

    Raises:
        subprocess.CalledProcessError: If command fails and check=True
    """
    logger.debug(f"Running command: {command}")

    try:
        result = subprocess.run(
            command,
            cwd=cwd,
            capture_output=capture_output,
            text=True,
            check=check,
            timeout=timeout
        )

        if result.stdout:
            logger.debug(f"Command output: {result.stdout}")

        if result.stderr:
            logger.warning(f"Command stderr: {result.stderr}")

        return result

    except subprocess.TimeoutExpired as e:
        logger.error(f"Command timed out: {e}")
        raise
    except subprocess.CalledProcessError as e:
        logger.error(f"Command failed with return code {e.returncode}: {e}")
        raise"#;

pub const SAFE_REMOVE: &str = r#"def safe_remove(path: Path) -> bool:
    """Safely remove a file or directory. Returns True on success."""
    try:
        if path.is_file():
            path.unlink()
            logger.debug(f"Removed file: {path}")
        elif path.is_dir():
            shutil.rmtree(path)
            logger.debug(f"Removed directory: {path}")
        else:
            logger.warning(f"Path does not exist: {path}")
            return False

        return True

    except Exception as e:
        logger.error(f"Failed to remove {path}: {e}")
        return False"#;

pub const ENSURE_DIRECTORY: &str = r#"def ensure_directory(path: Path, parents: bool = True) -> bool:
    """Ensure a directory exists. Returns True on success."""
    try:
        path.mkdir(parents=parents, exist_ok=True)
        logger.debug(f"Ensured directory exists: {path}")
        return True

    except Exception as e:
        logger.error(f"Failed to create directory {path}: {e}")
        return False"#;

pub const INSTALLER_FUNCTIONS: &str = r#"def install_openssl(prefix: Path, config: Config) -> Result:
    """Install OpenSSL to the specified prefix."""
    logger.info(f"Installing OpenSSL to {prefix}")

    try:
        if not ensure_directory(prefix):
            return Result(False, f"Failed to create prefix directory: {prefix}")

        run_command(['./Configure', f'--prefix={prefix}', f'--openssldir={prefix}/ssl'])
        logger.info("Configuration completed successfully")

        run_command(['make'])
        logger.info("Build completed successfully")

        if not config.dry_run:
            run_command(['make', 'install'])
            logger.info("Installation completed successfully")

        return Result(True, "OpenSSL installed successfully")

    except Exception as e:
        logger.error(f"Installation failed: {e}")
        return Result(False, f"Installation failed: {e}")


def verify_installation(prefix: Path) -> Result:
    """Verify OpenSSL installation."""
    logger.info("Verifying OpenSSL installation")

    try:
        openssl_bin = prefix / 'bin' / 'openssl'

        if not openssl_bin.exists():
            return Result(False, "OpenSSL binary not found")

        result = run_command([str(openssl_bin), 'version'])

        if 'OpenSSL' in result.stdout:
            logger.info(f"OpenSSL version: {result.stdout.strip()}")
            return Result(True, "OpenSSL installation verified")
        return Result(False, "OpenSSL version check failed")

    except Exception as e:
        logger.error(f"Verification failed: {e}")
        return Result(False, f"Verification failed: {e}")"#;

pub const BUILD_FUNCTIONS: &str = r#"def build_openssl(config: Config) -> Result:
    """Build OpenSSL from source."""
    logger.info("Building OpenSSL from source")

    try:
        if config.clean:
            clean_result = clean_build_directory()
            if not clean_result.success:
                return clean_result

        configure_result = run_configure(config)
        if not configure_result.success:
            return configure_result

        make_result = run_make(config)
        if not make_result.success:
            return make_result

        test_result = run_tests(config)
        if not test_result.success:
            logger.warning(f"Tests failed: {test_result.message}")

        return Result(True, "OpenSSL build completed successfully")

    except Exception as e:
        logger.error(f"Build failed: {e}")
        return Result(False, f"Build failed: {e}")


def run_configure(config: Config) -> Result:
    """Run OpenSSL configure script."""
    logger.info("Running configure script")

    try:
        configure_cmd = ['./Configure', '--prefix=/usr/local']
        if config.verbose:
            configure_cmd.append('--verbose')

        run_command(configure_cmd)
        return Result(True, "Configure completed successfully")

    except Exception as e:
        return Result(False, f"Configure failed: {e}")


def run_make(config: Config) -> Result:
    """Run make to build OpenSSL."""
    logger.info("Running make")

    try:
        make_cmd = ['make', f'-j{config.parallel}']
        if config.verbose:
            make_cmd.append('VERBOSE=1')

        run_command(make_cmd)
        return Result(True, "Make completed successfully")

    except Exception as e:
        return Result(False, f"Make failed: {e}")


def run_tests(config: Config) -> Result:
    """Run OpenSSL tests."""
    logger.info("Running tests")

    try:
        test_cmd = ['make', 'test']
        if config.verbose:
            test_cmd.append('VERBOSE=1')

        run_command(test_cmd)
        return Result(True, "Tests completed successfully")

    except Exception as e:
        return Result(False, f"Tests failed: {e}")


def clean_build_directory() -> Result:
    """Clean the build directory."""
    logger.info("Cleaning build directory")

    try:
        for artifact in ['Makefile', 'configdata.pm', 'crypto', 'ssl', 'apps', 'test']:
            artifact_path = Path(artifact)
            if artifact_path.exists():
                safe_remove(artifact_path)

        return Result(True, "Build directory cleaned")

    except Exception as e:
        return Result(False, f"Failed to clean build directory: {e}")"#;

pub const PERFORMANCE_FUNCTIONS: &str = r#"def run_benchmark(benchmark_name: str, iterations: int, config: Config) -> Result:
    """Run a performance benchmark."""
    logger.info(f"Running benchmark: {benchmark_name}")

    try:
        results = []

        for i in range(iterations):
            start_time = time.time()
            execute_benchmark(benchmark_name)
            results.append(time.time() - start_time)

            if config.verbose and i % 100 == 0:
                logger.debug(f"Completed {i} iterations")

        stats = calculate_statistics(results)

        if config.output:
            save_results(benchmark_name, stats, config.output)

        return Result(True, f"Benchmark completed: {benchmark_name}", stats)

    except Exception as e:
        logger.error(f"Benchmark failed: {e}")
        return Result(False, f"Benchmark failed: {e}")


def execute_benchmark(benchmark_name: str) -> float:
    """Execute a single benchmark iteration and return its duration."""
    time.sleep(0.001)
    return 0.001


def calculate_statistics(results: List[float]) -> Dict[str, float]:
    """Calculate statistics from benchmark results."""
    return {
        'mean': statistics.mean(results),
        'median': statistics.median(results),
        'std_dev': statistics.stdev(results) if len(results) > 1 else 0,
        'min': min(results),
        'max': max(results),
        'count': len(results)
    }


def save_results(benchmark_name: str, stats: Dict[str, float], output_file: str) -> None:
    """Save benchmark results to a JSON file."""
    output_path = Path(output_file)
    output_path.parent.mkdir(parents=True, exist_ok=True)

    results_data = {
        'benchmark': benchmark_name,
        'timestamp': datetime.now().isoformat(),
        'statistics': stats
    }

    with open(output_path, 'w') as f:
        json.dump(results_data, f, indent=2)

    logger.info(f"Results saved to {output_path}")"#;

pub const INSTALLER_MAIN: &str = r#"        app_config = Config(
            verbose=verbose,
            dry_run=dry_run,
            output_dir=Path(prefix)
        )

        install_result = install_openssl(Path(prefix), app_config)

        if not install_result.success:
            logger.error(f"Installation failed: {install_result.message}")
            sys.exit(1)

        verify_result = verify_installation(Path(prefix))

        if not verify_result.success:
            logger.warning(f"Verification failed: {verify_result.message}")
        else:
            logger.info("Installation verified successfully")"#;

pub const BUILD_MAIN: &str = r#"        app_config = Config(
            verbose=verbose,
            parallel=parallel,
            clean=clean
        )

        build_result = build_openssl(app_config)

        if not build_result.success:
            logger.error(f"Build failed: {build_result.message}")
            sys.exit(1)"#;

pub const PERFORMANCE_MAIN: &str = r#"        app_config = Config(
            verbose=verbose,
            output=output
        )

        if benchmark:
            benchmark_result = run_benchmark(benchmark, iterations, app_config)

            if not benchmark_result.success:
                logger.error(f"Benchmark failed: {benchmark_result.message}")
                sys.exit(1)

            if benchmark_result.data:
                stats = benchmark_result.data
                print(f"\nBenchmark Results for {benchmark}:")
                print(f"  Mean: {stats['mean']:.6f} seconds")
                print(f"  Median: {stats['median']:.6f} seconds")
                print(f"  Std Dev: {stats['std_dev']:.6f} seconds")
                print(f"  Min: {stats['min']:.6f} seconds")
                print(f"  Max: {stats['max']:.6f} seconds")
                print(f"  Iterations: {stats['count']}")
        else:
            logger.info("No benchmark specified")"#;
