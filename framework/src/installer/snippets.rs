//! Python helper blocks inserted into migrated installer scripts, and the
//! static files of a distributable installer package.

pub const INSTALLER_HELPERS: &str = r#"
# Installer helpers
import platform
import hashlib
import urllib.request
import zipfile
import tarfile
from typing import Union


def get_system_info() -> Dict[str, str]:
    """Get system information for installation."""
    return {
        'os': platform.system(),
        'arch': platform.machine(),
        'python_version': platform.python_version(),
        'platform': platform.platform()
    }


def download_file(url: str, destination: Path, expected_sha256: Optional[str] = None) -> bool:
    """Download a file, verifying its SHA-256 digest when one is given."""
    try:
        logger.info(f"Downloading {url} to {destination}")
        destination.parent.mkdir(parents=True, exist_ok=True)
        urllib.request.urlretrieve(url, destination)

        if expected_sha256:
            digest = hashlib.sha256(destination.read_bytes()).hexdigest()
            if digest != expected_sha256.lower():
                logger.error(f"Checksum mismatch for {destination}: {digest}")
                return False

        logger.info(f"Download completed: {destination}")
        return True

    except Exception as e:
        logger.error(f"Download failed: {e}")
        return False


def extract_archive(archive_path: Path, extract_to: Path) -> bool:
    """Extract a zip or tar archive."""
    try:
        logger.info(f"Extracting {archive_path} to {extract_to}")
        extract_to.mkdir(parents=True, exist_ok=True)

        if archive_path.suffix == '.zip':
            with zipfile.ZipFile(archive_path, 'r') as zip_ref:
                zip_ref.extractall(extract_to)
        elif archive_path.name.endswith(('.tar', '.tar.gz', '.tgz')):
            with tarfile.open(archive_path, 'r:*') as tar_ref:
                tar_ref.extractall(extract_to)
        else:
            logger.error(f"Unsupported archive format: {archive_path.suffix}")
            return False

        logger.info(f"Extraction completed: {extract_to}")
        return True

    except Exception as e:
        logger.error(f"Extraction failed: {e}")
        return False


def check_dependencies() -> Dict[str, bool]:
    """Check that the build tools are on PATH."""
    dependencies = {
        'make': shutil.which('make') is not None,
        'gcc': shutil.which('gcc') is not None,
        'perl': shutil.which('perl') is not None,
        'python3': shutil.which('python3') is not None
    }

    missing = [dep for dep, available in dependencies.items() if not available]
    if missing:
        logger.warning(f"Missing dependencies: {', '.join(missing)}")

    return dependencies


def install_openssl(prefix: Path, config: Dict[str, Any]) -> bool:
    """Configure, build, test and install OpenSSL under prefix."""
    try:
        logger.info(f"Installing OpenSSL to {prefix}")

        if not all(check_dependencies().values()):
            logger.error("Missing required dependencies")
            return False

        prefix.mkdir(parents=True, exist_ok=True)

        configure_cmd = [
            './Configure',
            f'--prefix={prefix}',
            f'--openssldir={prefix}/ssl',
            'shared',
            'zlib'
        ]
        if config.get('enable_fips'):
            configure_cmd.append('enable-fips')

        run_command(configure_cmd, check=True)
        logger.info("Configuration completed")

        run_command(['make'], check=True)
        logger.info("Build completed")

        if config.get('run_tests', True):
            run_command(['make', 'test'], check=True)
            logger.info("Tests completed")

        run_command(['make', 'install'], check=True)
        logger.info("Installation completed")
        return True

    except Exception as e:
        logger.error(f"Installation failed: {e}")
        return False


def verify_installation(prefix: Path) -> bool:
    """Check that the installed openssl binary reports a version."""
    try:
        openssl_bin = prefix / 'bin' / 'openssl'
        if not openssl_bin.exists():
            logger.error("OpenSSL binary not found")
            return False

        result = run_command([str(openssl_bin), 'version'], check=True)
        if 'OpenSSL' in result.stdout:
            logger.info(f"OpenSSL version: {result.stdout.strip()}")
            return True

        logger.error("OpenSSL version check failed")
        return False

    except Exception as e:
        logger.error(f"Verification failed: {e}")
        return False
"#;

pub const CONAN_INTEGRATION: &str = r#"
# Conan integration
from conan.api.conan_api import ConanAPI


def setup_conan_environment() -> bool:
    """Ensure a default Conan profile exists."""
    try:
        conan_api = ConanAPI()
        if not conan_api.profiles.get_profile('default'):
            conan_api.profiles.create_profile('default')

        logger.info("Conan environment setup completed")
        return True

    except Exception as e:
        logger.error(f"Conan setup failed: {e}")
        return False


def install_via_conan(version: str, profile: str = 'default') -> bool:
    """Install OpenSSL through the Conan package manager."""
    try:
        logger.info(f"Installing OpenSSL {version} via Conan")
        run_command(
            ['conan', 'install', f'--requires=openssl/{version}', '--profile', profile, '--build', 'missing'],
            check=True
        )
        logger.info("Conan installation completed")
        return True

    except Exception as e:
        logger.error(f"Conan installation failed: {e}")
        return False
"#;

pub const DOCKER_SUPPORT: &str = r#"
# Docker support
import docker
from docker.errors import DockerException


def build_docker_image(dockerfile_path: Path, tag: str) -> bool:
    """Build a Docker image from the directory holding dockerfile_path."""
    try:
        client = docker.from_env()
        logger.info(f"Building Docker image: {tag}")
        client.images.build(path=str(dockerfile_path.parent), tag=tag, rm=True)
        logger.info(f"Docker image built successfully: {tag}")
        return True

    except DockerException as e:
        logger.error(f"Docker build failed: {e}")
        return False


def run_in_docker(image: str, command: List[str], volumes: Optional[Dict[str, str]] = None) -> bool:
    """Run command in a throwaway container and report whether it exited 0."""
    try:
        client = docker.from_env()
        logger.info(f"Running command in Docker: {command}")
        container = client.containers.run(image, command, volumes=volumes or {}, detach=True)
        result = container.wait()
        logger.info(f"Container logs: {container.logs().decode('utf-8')}")
        container.remove()
        return result['StatusCode'] == 0

    except DockerException as e:
        logger.error(f"Docker run failed: {e}")
        return False
"#;

/// `setup.py` of the installer package.
pub const PACKAGE_SETUP_PY: &str = r#""""
Setup script for the OpenSSL Installer package.
"""

from pathlib import Path

from setuptools import find_packages, setup

readme_path = Path(__file__).parent / 'README.md'
long_description = readme_path.read_text(encoding='utf-8') if readme_path.exists() else ''

setup(
    name='openssl-installer',
    version='1.0.0',
    description='Modern Python-based OpenSSL installer',
    long_description=long_description,
    long_description_content_type='text/markdown',
    author='OpenSSL Tools Team',
    packages=find_packages(where='src'),
    package_dir={'': 'src'},
    python_requires='>=3.8',
    install_requires=[
        'click>=8.0.0',
        'docker>=6.0.0',
        'conan>=2.0.0',
    ],
    extras_require={
        'dev': [
            'pytest>=7.0.0',
            'pytest-cov>=4.0.0',
            'black>=22.0.0',
            'isort>=5.0.0',
            'flake8>=5.0.0',
            'mypy>=1.0.0',
        ],
    },
    entry_points={
        'console_scripts': [
            'openssl-install=openssl_installer.cli:main',
        ],
    },
    classifiers=[
        'Development Status :: 4 - Beta',
        'Intended Audience :: Developers',
        'License :: OSI Approved :: MIT License',
        'Programming Language :: Python :: 3',
        'Topic :: Software Development :: Build Tools',
        'Topic :: System :: Installation/Setup',
    ],
)
"#;

pub const PACKAGE_REQUIREMENTS: &str = "click>=8.0.0
docker>=6.0.0
conan>=2.0.0
";

/// Container image that installs the package and runs its entry point.
pub const PACKAGE_DOCKERFILE: &str = r#"FROM ubuntu:22.04

RUN apt-get update && apt-get install -y \
    build-essential \
    make \
    gcc \
    perl \
    python3 \
    python3-pip \
    git \
    wget \
    curl \
    && rm -rf /var/lib/apt/lists/*

COPY requirements.txt /tmp/
RUN pip3 install -r /tmp/requirements.txt

COPY . /app/openssl-installer
WORKDIR /app/openssl-installer

RUN pip3 install -e .

ENTRYPOINT ["openssl-install"]
"#;

pub const PACKAGE_README: &str = r#"# OpenSSL Installer

Modern Python-based OpenSSL installer.

## Features

- Uses subprocess, pathlib and click
- Runs on Linux, macOS and Windows
- Optional Docker and Conan integration

## Installation

```bash
pip install .
```

## Usage

```bash
openssl-install --prefix /usr/local
openssl-install --config config.json --verbose
openssl-install --dry-run
```

## Development

```bash
pip install -e .[dev]
pytest
black . && isort .
```

## Docker

```bash
docker build -f docker/Dockerfile -t openssl-installer .
```

## License

MIT
"#;
